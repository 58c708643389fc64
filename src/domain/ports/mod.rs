mod http_port;
mod view_port;

pub use http_port::{ApiRequest, HttpMethod, HttpPort};
pub use view_port::{
    FieldId, ListId, ListItem, SelectId, SelectOption, Section, TextRegion, ViewPort,
};
