//! UI components for the Ocean Simulation Viewer.

mod result_image;
mod upload_form;

pub use result_image::ResultImage;
pub use upload_form::UploadForm;
