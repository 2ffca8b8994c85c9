/// Comparison-table data, served as a static asset next to the bundle.
pub fn comparison_data_url() -> &'static str {
    "/data/comparison-data.json"
}
