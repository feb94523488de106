//! Full pages assembled from components.

mod test_page;

pub use test_page::{TestPage, render_test_page};
