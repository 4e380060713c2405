//! データ構造体モジュール
//!
//! 上流APIの形に依存しない、アプリ内部の作品表現

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// IIIF画像サーバ (Art Institute of Chicago)
const IIIF_BASE: &str = "https://www.artic.edu/iiif/2";

// ============================================
// 作品ID
// ============================================

/// 作品ID。数値でも文字列でも同じ10進文字列に正規化して保持する
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(from = "RawId")]
pub struct ArtworkId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(serde_json::Number),
    Text(String),
}

impl From<RawId> for ArtworkId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => ArtworkId::from_number(&n),
            RawId::Text(s) => ArtworkId::from(s),
        }
    }
}

impl ArtworkId {
    /// 小数部のない数値は整数表記にそろえる（`5.0` → `"5"`）
    pub fn from_number(n: &serde_json::Number) -> ArtworkId {
        if let Some(u) = n.as_u64() {
            return ArtworkId(u.to_string());
        }
        if let Some(i) = n.as_i64() {
            return ArtworkId(i.to_string());
        }
        match n.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                ArtworkId((f as i64).to_string())
            }
            _ => ArtworkId(n.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ArtworkId {
    fn from(s: String) -> Self {
        ArtworkId::from(s.as_str())
    }
}

impl From<&str> for ArtworkId {
    fn from(s: &str) -> Self {
        ArtworkId(s.trim().to_string())
    }
}

impl From<u64> for ArtworkId {
    fn from(n: u64) -> Self {
        ArtworkId(n.to_string())
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ArtworkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

// ============================================
// 画像参照
// ============================================

/// 画像参照（直接URL、またはIIIF画像ID）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Url(String),
    Iiif(String),
}

impl ImageRef {
    /// `scheme://` で始まればURL、それ以外はIIIF IDとして扱う
    pub fn parse(raw: &str) -> Option<ImageRef> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if has_url_scheme(raw) {
            Some(ImageRef::Url(raw.to_string()))
        } else {
            Some(ImageRef::Iiif(raw.to_string()))
        }
    }

    /// 指定幅で表示するための画像URL
    pub fn url(&self, width: u32) -> String {
        match self {
            ImageRef::Url(url) => url.clone(),
            ImageRef::Iiif(id) => format!("{}/{}/full/{},/0/default.jpg", IIIF_BASE, id, width),
        }
    }
}

fn has_url_scheme(raw: &str) -> bool {
    match raw.split_once("://") {
        Some((scheme, rest)) => {
            !rest.is_empty()
                && scheme.chars().next().map_or(false, |c| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Thumbnail {
    pub url: Option<String>,
    pub lqip: Option<String>,
    pub alt_text: Option<String>,
}

impl Thumbnail {
    /// 本画像の読み込み失敗時に差し替える画像（lqip優先）
    pub fn fallback(&self) -> Option<&str> {
        self.lqip
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.url.as_deref().filter(|s| !s.is_empty()))
    }
}

// ============================================
// 作品
// ============================================

/// 正規化済みの作品レコード。取得のたびに作り直し、永続化しない
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub image: Option<ImageRef>,
    pub artist: String,
    pub date: String,
    pub medium: String,
    pub dimensions: String,
    pub credit_line: String,
    pub thumbnail: Option<Thumbnail>,
}

impl Artwork {
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn image_url(&self, width: u32) -> Option<String> {
        self.image.as_ref().map(|image| image.url(width))
    }

    pub fn fallback_image(&self) -> Option<String> {
        self.thumbnail
            .as_ref()
            .and_then(|t| t.fallback())
            .map(str::to_string)
    }

    pub fn alt_text(&self) -> String {
        if let Some(alt) = self.thumbnail.as_ref().and_then(|t| t.alt_text.clone()) {
            if !alt.is_empty() {
                return alt;
            }
        }
        if self.title.is_empty() {
            "Artwork image".to_string()
        } else {
            self.title.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_number_and_string_match() {
        let from_num: ArtworkId = serde_json::from_str("436535").unwrap();
        let from_str: ArtworkId = serde_json::from_str("\"436535\"").unwrap();
        assert_eq!(from_num, from_str);
        assert_eq!(from_num, ArtworkId::from(436535u64));
        assert_eq!(from_num.as_str(), "436535");
    }

    #[test]
    fn test_id_from_integral_float() {
        let id: ArtworkId = serde_json::from_str("5.0").unwrap();
        assert_eq!(id, ArtworkId::from(5u64));
        let id: ArtworkId = serde_json::from_str("5.5").unwrap();
        assert_eq!(id.as_str(), "5.5");
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = ArtworkId::from(27992u64);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"27992\"");
    }

    #[test]
    fn test_id_trims_whitespace() {
        assert_eq!(ArtworkId::from(" 12 "), ArtworkId::from(12u64));
        assert_eq!(ArtworkId::from(" 12 ".to_string()).as_str(), "12");
    }

    #[test]
    fn test_image_ref_detects_url() {
        let image = ImageRef::parse("https://images.metmuseum.org/x.jpg").unwrap();
        assert_eq!(image, ImageRef::Url("https://images.metmuseum.org/x.jpg".to_string()));
        assert_eq!(image.url(600), "https://images.metmuseum.org/x.jpg");
    }

    #[test]
    fn test_image_ref_builds_iiif_url() {
        let image = ImageRef::parse("1adf2696-8489-499b-cad2-821d7fde4b33").unwrap();
        assert_eq!(
            image.url(400),
            "https://www.artic.edu/iiif/2/1adf2696-8489-499b-cad2-821d7fde4b33/full/400,/0/default.jpg"
        );
    }

    #[test]
    fn test_image_ref_empty_is_none() {
        assert_eq!(ImageRef::parse(""), None);
        assert_eq!(ImageRef::parse("   "), None);
    }

    #[test]
    fn test_thumbnail_fallback_prefers_lqip() {
        let thumb = Thumbnail {
            url: Some("https://example.org/small.jpg".to_string()),
            lqip: Some("data:image/gif;base64,R0lG".to_string()),
            alt_text: None,
        };
        assert_eq!(thumb.fallback(), Some("data:image/gif;base64,R0lG"));

        let thumb = Thumbnail { lqip: Some(String::new()), ..thumb };
        assert_eq!(thumb.fallback(), Some("https://example.org/small.jpg"));
        assert_eq!(Thumbnail::default().fallback(), None);
    }

    #[test]
    fn test_alt_text_defaults() {
        let art = Artwork::default();
        assert_eq!(art.alt_text(), "Artwork image");
        let art = Artwork { title: "Water Lilies".to_string(), ..Artwork::default() };
        assert_eq!(art.alt_text(), "Water Lilies");
    }
}
