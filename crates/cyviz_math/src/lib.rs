//! Mathematics for the Fermat surface explorer
//!
//! ## Core Types
//!
//! - [`Vec4`] - Point in ℝ⁴, the real form of (z1, z2) ∈ ℂ²
//! - [`Mat4`] - Column-major 4x4 matrix for camera and model transforms
//! - [`Complex`] - Complex number with the principal-branch power
//!
//! ## Surface Pipeline
//!
//! A surface vertex goes through [`fermat_point`], then
//! [`DualityMode::apply`], then [`ProjectionMethod::project`].

mod vec4;
pub mod vec3;
pub mod mat4;
pub mod complex;
pub mod fermat;
pub mod duality;
pub mod projection;

pub use vec4::Vec4;
pub use mat4::Mat4;
pub use complex::Complex;
pub use fermat::{fermat_point, symmetry_order, ParameterDomain};
pub use duality::DualityMode;
pub use projection::ProjectionMethod;
