//! Unsplash search response, reduced to the fields Gazette reads.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Photo>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Photo {
    #[serde(default)]
    pub urls: PhotoUrls,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PhotoUrls {
    pub regular: Option<String>,
}
