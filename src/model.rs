use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub menu: String,
    pub distance: String,
    pub map_link: String,
    pub photo_url: Option<String>,
    pub votes: u64,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        menu: impl Into<String>,
        distance: impl Into<String>,
        map_link: impl Into<String>,
        photo_url: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            menu: menu.into(),
            distance: distance.into(),
            map_link: map_link.into(),
            photo_url: photo_url.filter(|p| !p.trim().is_empty()),
            votes: 0,
        }
    }

    /// Photo URL with blank values treated as absent.
    pub fn photo(&self) -> Option<&str> {
        self.photo_url.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }
}

/// Coerce a raw vote-count cell to a non-negative integer.
///
/// Unparsable and fractional values become 0; negative values clamp to 0.
pub fn coerce_votes(raw: &str) -> u64 {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => n as u64,
        _ => 0,
    }
}

/// The three-row sample table used when no store file exists yet.
pub fn seed_rows() -> Vec<Restaurant> {
    let mut rows = vec![
        Restaurant::new(
            "성수족발 본점",
            "족발",
            "500m",
            "https://naver.me/GvctmbhI",
            Some("https://search.pstatic.net/common/?autoRotate=true&quality=95&type=w750&src=https://ldb-phinf.pstatic.net/20200824_105/1598237583093cbAkg_JPEG/7V5I-S2mXv_p8a2v_bnI40sE.jpg".to_string()),
        ),
        Restaurant::new(
            "꿉당 성수점",
            "꿉당 목살, K-목살",
            "400m",
            "https://naver.me/54PqGPbE",
            Some("https://search.pstatic.net/common/?autoRotate=true&quality=95&type=w750&src=https://ldb-phinf.pstatic.net/20240125_205/1706173019183qfT0M_JPEG/20240123_180436.jpg".to_string()),
        ),
        Restaurant::new(
            "소문난성수감자탕",
            "감자탕",
            "600m",
            "https://naver.me/F1Yv1tON",
            Some("https://search.pstatic.net/common/?autoRotate=true&quality=95&type=w750&src=https://ldb-phinf.pstatic.net/20231116_13/1700120257904s6bAj_JPEG/KakaoTalk_20231116_163618429.jpg".to_string()),
        ),
    ];
    rows[0].votes = 10;
    rows[1].votes = 5;
    rows[2].votes = 15;
    rows
}
