mod catalog;
mod color;
mod dataset;
mod error;
mod layout;
mod scale;
mod svg;

pub use catalog::list_datasets;
pub use color::{ColorPolicy, LabelHue, Palette, RandomHue, Rgb, Rgba};
pub use dataset::{Dataset, load_dataset};
pub use error::SankeyError;
pub use layout::{FlowBand, Label, LayoutConfig, NodeGeometry, Point, SankeyLayout, Size, layout};
pub use scale::ViewScale;
pub use svg::render_svg;
