pub mod encoding;
pub mod result_ext;

pub use encoding::encode_uri_component;
pub use result_ext::ResultExt;
