//! Art Institute of Chicago API 連携
//!
//! 一覧/詳細とも1リクエスト。`fields=` で必要な列だけ返させる

use serde::Deserialize;
use web_sys::AbortSignal;

use super::http::get_json;
use super::{select_listing, ApiError, ListRequest};
use crate::models::{Artwork, ArtworkId, ImageRef, Thumbnail};

const ARTIC_BASE: &str = "https://api.artic.edu/api/v1";

/// レスポンスに含める列
pub const FIELDS: &str =
    "id,title,image_id,artist_title,date_display,medium_display,dimensions,credit_line,thumbnail";

/// 1ページで取得できる最大件数
pub const MAX_PAGE_LIMIT: usize = 100;

// ============================================
// レスポンス型
// ============================================

#[derive(Debug, Deserialize)]
pub struct ArticEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct ArticArtwork {
    pub id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub artist_title: Option<String>,
    #[serde(default)]
    pub date_display: Option<String>,
    #[serde(default)]
    pub medium_display: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub credit_line: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<ArticThumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct ArticThumbnail {
    #[serde(default)]
    pub lqip: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
}

impl From<ArticArtwork> for Artwork {
    fn from(a: ArticArtwork) -> Self {
        Artwork {
            id: a.id,
            title: a.title.unwrap_or_default(),
            image: a.image_id.as_deref().and_then(ImageRef::parse),
            artist: a.artist_title.unwrap_or_default(),
            date: a.date_display.unwrap_or_default(),
            medium: a.medium_display.unwrap_or_default(),
            dimensions: a.dimensions.unwrap_or_default(),
            credit_line: a.credit_line.unwrap_or_default(),
            thumbnail: a.thumbnail.map(|t| Thumbnail {
                url: None,
                lqip: t.lqip,
                alt_text: t.alt_text,
            }),
        }
    }
}

// ============================================
// URL組み立て
// ============================================

/// クエリが空なら一覧、そうでなければ検索エンドポイント
pub fn list_url(query: &str, limit: usize) -> String {
    let limit = limit.clamp(1, MAX_PAGE_LIMIT);
    let query = query.trim();
    if query.is_empty() {
        format!("{}/artworks?page=1&limit={}&fields={}", ARTIC_BASE, limit, FIELDS)
    } else {
        format!(
            "{}/artworks/search?q={}&limit={}&fields={}",
            ARTIC_BASE,
            urlencoding::encode(query),
            limit,
            FIELDS
        )
    }
}

pub fn artwork_url(id: &ArtworkId) -> String {
    format!("{}/artworks/{}?fields={}", ARTIC_BASE, urlencoding::encode(id.as_str()), FIELDS)
}

// ============================================
// 取得
// ============================================

pub async fn fetch_artwork(id: &ArtworkId, signal: Option<&AbortSignal>) -> Result<Artwork, ApiError> {
    let envelope: ArticEnvelope<ArticArtwork> = get_json(&artwork_url(id), signal).await?;
    Ok(envelope.data.into())
}

pub async fn fetch_listing(
    request: &ListRequest,
    signal: Option<&AbortSignal>,
) -> Result<Vec<Artwork>, ApiError> {
    let url = list_url(&request.query, request.candidate_count());
    let envelope: ArticEnvelope<Vec<ArticArtwork>> = get_json(&url, signal).await?;
    let candidates = envelope.data.into_iter().map(Artwork::from).collect();
    Ok(select_listing(candidates, request))
}
