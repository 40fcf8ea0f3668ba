mod model;
mod value;
mod xml;

pub use model::{
    Authentication, IcecastConfig, Limits, ListenSocket, Logging, Mount, Paths,
};
pub use value::XmlValue;
pub use xml::parse_document;
