//! TMDB image URL helpers.

/// TMDB image CDN base.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Image size tokens accepted by the CDN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageSize {
    W92,
    W154,
    W185,
    W342,
    #[default]
    W500,
    W780,
    Original,
    /// Backdrop height variant.
    H632,
}

impl ImageSize {
    /// All sizes, smallest first.
    pub const ALL: [ImageSize; 8] = [
        ImageSize::W92,
        ImageSize::W154,
        ImageSize::W185,
        ImageSize::W342,
        ImageSize::W500,
        ImageSize::W780,
        ImageSize::H632,
        ImageSize::Original,
    ];

    /// URL path token.
    pub fn token(&self) -> &'static str {
        match self {
            ImageSize::W92 => "w92",
            ImageSize::W154 => "w154",
            ImageSize::W185 => "w185",
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::Original => "original",
            ImageSize::H632 => "h632",
        }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl std::str::FromStr for ImageSize {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageSize::ALL
            .into_iter()
            .find(|size| size.token() == s)
            .ok_or_else(|| crate::Error::other(format!("Unknown image size: {}", s)))
    }
}

/// Full image URL, or `None` when there is no path.
pub fn image_url(path: Option<&str>, size: ImageSize) -> Option<String> {
    path.filter(|p| !p.is_empty())
        .map(|p| format!("{}/{}{}", IMAGE_BASE_URL, size, p))
}

/// Poster URL, default size w342.
pub fn poster_url(path: Option<&str>) -> Option<String> {
    image_url(path, ImageSize::W342)
}

/// Backdrop URL, default size w780.
pub fn backdrop_url(path: Option<&str>) -> Option<String> {
    image_url(path, ImageSize::W780)
}

/// Profile URL, default size w185.
pub fn profile_url(path: Option<&str>) -> Option<String> {
    image_url(path, ImageSize::W185)
}

/// Placeholder poster labelled with the title.
pub fn placeholder_image(title: &str) -> String {
    format!(
        "https://via.placeholder.com/342x513/213448/ECEFCA?text={}",
        urlencoding::encode(title)
    )
}

/// Poster URL, falling back to a placeholder keyed by title.
pub fn poster_url_or_placeholder(path: Option<&str>, title: &str, size: ImageSize) -> String {
    image_url(path, size).unwrap_or_else(|| placeholder_image(title))
}
