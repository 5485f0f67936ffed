//! I/O infrastructure: sensor log decoding and map export.
//!
//! - **lms**: fixed-layout binary laser stream decoder
//! - **nav**: whitespace-delimited pose log parser
//! - **svg**: voted-cell map renderer

pub mod lms;
pub mod nav;
pub mod svg;

pub use lms::{decode_lms, read_lms, HEADER_SIZE};
pub use nav::{parse_nav, read_nav};
pub use svg::{render_map, save_svg, SvgConfig};
