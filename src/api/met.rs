//! The Met Collection API 連携
//!
//! 検索エンドポイントでIDを集め、IDごとに詳細を取得する二段階フロー

use serde::Deserialize;
use web_sys::AbortSignal;

use super::http::get_json;
use super::{fetch_each, select_listing, settle_all, ApiError, ListRequest};
use crate::models::{Artwork, ArtworkId, ImageRef, Thumbnail};

const MET_BASE: &str = "https://collectionapi.metmuseum.org/public/collection/v1";

// ============================================
// レスポンス型
// ============================================

#[derive(Debug, Deserialize, Default)]
pub struct MetSearchResponse {
    #[serde(default)]
    #[allow(dead_code)]
    pub total: u64,
    /// ヒットなしの場合は null が返る
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Option<Vec<ArtworkId>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetObject {
    #[serde(rename = "objectID")]
    pub object_id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub primary_image: Option<String>,
    #[serde(default)]
    pub primary_image_small: Option<String>,
    #[serde(default)]
    pub additional_images: Option<Vec<String>>,
    #[serde(default)]
    pub artist_display_name: Option<String>,
    #[serde(default)]
    pub object_date: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub credit_line: Option<String>,
}

impl From<MetObject> for Artwork {
    fn from(o: MetObject) -> Self {
        // primaryImage → primaryImageSmall → additionalImages[0] の順で最初の非空を採用
        let image = [o.primary_image.as_deref(), o.primary_image_small.as_deref()]
            .into_iter()
            .flatten()
            .chain(o.additional_images.iter().flatten().map(String::as_str).take(1))
            .find_map(ImageRef::parse);

        let thumbnail = o
            .primary_image_small
            .clone()
            .filter(|s| !s.is_empty())
            .map(|url| Thumbnail { url: Some(url), ..Thumbnail::default() });

        Artwork {
            id: o.object_id,
            title: o.title.unwrap_or_default(),
            image,
            artist: o.artist_display_name.unwrap_or_default(),
            date: o.object_date.unwrap_or_default(),
            medium: o.medium.unwrap_or_default(),
            dimensions: o.dimensions.unwrap_or_default(),
            credit_line: o.credit_line.unwrap_or_default(),
            thumbnail,
        }
    }
}

// ============================================
// URL組み立て
// ============================================

pub fn search_url(query: &str) -> String {
    format!("{}/search?hasImages=true&q={}", MET_BASE, urlencoding::encode(query))
}

pub fn object_url(id: &ArtworkId) -> String {
    format!("{}/objects/{}", MET_BASE, urlencoding::encode(id.as_str()))
}

/// 検索結果の先頭から候補IDを取り出す
pub fn candidate_ids(search: MetSearchResponse, count: usize) -> Vec<ArtworkId> {
    search
        .object_ids
        .unwrap_or_default()
        .into_iter()
        .take(count)
        .collect()
}

// ============================================
// 取得
// ============================================

pub async fn fetch_artwork(id: &ArtworkId, signal: Option<&AbortSignal>) -> Result<Artwork, ApiError> {
    let object: MetObject = get_json(&object_url(id), signal).await?;
    Ok(object.into())
}

/// 検索 → 候補の詳細を並列取得 → 画像ありで絞り込み → limit件に切り詰め
pub async fn fetch_listing(
    request: &ListRequest,
    signal: Option<&AbortSignal>,
) -> Result<Vec<Artwork>, ApiError> {
    let search: MetSearchResponse = get_json(&search_url(&request.query), signal).await?;
    let ids = candidate_ids(search, request.candidate_count());
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let results = fetch_each(&ids, |id| fetch_artwork(id, signal)).await;
    let candidates = settle_all(results)?;
    Ok(select_listing(candidates, request))
}

#[cfg(test)]
mod tests {
    use super::*;

    const OBJECT_JSON: &str = r#"{
        "objectID": 436535,
        "isHighlight": true,
        "primaryImage": "https://images.metmuseum.org/CRDImages/ep/original/DT1567.jpg",
        "primaryImageSmall": "https://images.metmuseum.org/CRDImages/ep/web-large/DT1567.jpg",
        "additionalImages": [],
        "title": "Wheat Field with Cypresses",
        "artistDisplayName": "Vincent van Gogh",
        "objectDate": "1889",
        "medium": "Oil on canvas",
        "dimensions": "28 7/8 × 36 3/4 in. (73.2 × 93.4 cm)",
        "creditLine": "Purchase, The Annenberg Foundation Gift, 1993"
    }"#;

    #[test]
    fn test_object_normalization() {
        let object: MetObject = serde_json::from_str(OBJECT_JSON).unwrap();
        let art = Artwork::from(object);
        assert_eq!(art.id, ArtworkId::from(436535u64));
        assert_eq!(art.title, "Wheat Field with Cypresses");
        assert_eq!(art.artist, "Vincent van Gogh");
        assert_eq!(art.date, "1889");
        assert_eq!(art.medium, "Oil on canvas");
        assert_eq!(art.credit_line, "Purchase, The Annenberg Foundation Gift, 1993");
        assert_eq!(
            art.image,
            Some(ImageRef::Url(
                "https://images.metmuseum.org/CRDImages/ep/original/DT1567.jpg".to_string()
            ))
        );
        assert_eq!(
            art.fallback_image().as_deref(),
            Some("https://images.metmuseum.org/CRDImages/ep/web-large/DT1567.jpg")
        );
    }

    #[test]
    fn test_image_falls_back_to_small_then_additional() {
        let object: MetObject = serde_json::from_str(
            r#"{"objectID": 1, "primaryImage": "", "primaryImageSmall": "https://x/small.jpg"}"#,
        )
        .unwrap();
        assert_eq!(Artwork::from(object).image, Some(ImageRef::Url("https://x/small.jpg".to_string())));

        let object: MetObject = serde_json::from_str(
            r#"{"objectID": 2, "primaryImage": "", "primaryImageSmall": "",
                "additionalImages": ["https://x/a.jpg", "https://x/b.jpg"]}"#,
        )
        .unwrap();
        let art = Artwork::from(object);
        assert_eq!(art.image, Some(ImageRef::Url("https://x/a.jpg".to_string())));
        assert_eq!(art.thumbnail, None);
    }

    #[test]
    fn test_object_without_image() {
        let object: MetObject = serde_json::from_str(
            r#"{"objectID": 3, "title": "Fragment", "primaryImage": "", "additionalImages": null}"#,
        )
        .unwrap();
        let art = Artwork::from(object);
        assert!(!art.has_image());
        assert_eq!(art.artist, "");
    }

    #[test]
    fn test_candidate_ids_handles_null_and_truncates() {
        let search: MetSearchResponse =
            serde_json::from_str(r#"{"total": 0, "objectIDs": null}"#).unwrap();
        assert!(candidate_ids(search, 10).is_empty());

        let search: MetSearchResponse =
            serde_json::from_str(r#"{"total": 4, "objectIDs": [4, 3, 2, 1]}"#).unwrap();
        let ids = candidate_ids(search, 2);
        assert_eq!(ids, vec![ArtworkId::from(4u64), ArtworkId::from(3u64)]);
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            search_url("still life"),
            "https://collectionapi.metmuseum.org/public/collection/v1/search?hasImages=true&q=still%20life"
        );
        assert_eq!(
            object_url(&ArtworkId::from(45734u64)),
            "https://collectionapi.metmuseum.org/public/collection/v1/objects/45734"
        );
    }
}
