//! 美術館コレクションAPIモジュール
//!
//! 2系統の上流API（The Met / Art Institute of Chicago）を `Collection` で切り替え、
//! どちらのレスポンスも `Artwork` に正規化して返す

pub mod artic;
mod http;
pub mod met;

use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use std::future::Future;
use web_sys::AbortSignal;

use crate::models::{Artwork, ArtworkId};

// ============================================
// エラー
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 後続のリクエストやアンマウントで中断された。画面には出さない
    #[error("Request aborted")]
    Aborted,
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }
}

// ============================================
// コレクション選択
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    #[default]
    Met,
    Artic,
}

impl Collection {
    pub fn parse(raw: &str) -> Option<Collection> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "met" | "metmuseum" => Some(Collection::Met),
            "artic" | "aic" => Some(Collection::Artic),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Collection::Met => "The Metropolitan Museum of Art",
            Collection::Artic => "Art Institute of Chicago",
        }
    }

    pub async fn fetch_listing(
        self,
        request: &ListRequest,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<Artwork>, ApiError> {
        match self {
            Collection::Met => met::fetch_listing(request, signal).await,
            Collection::Artic => artic::fetch_listing(request, signal).await,
        }
    }

    pub async fn fetch_artwork(
        self,
        id: &ArtworkId,
        signal: Option<&AbortSignal>,
    ) -> Result<Artwork, ApiError> {
        match self {
            Collection::Met => met::fetch_artwork(id, signal).await,
            Collection::Artic => artic::fetch_artwork(id, signal).await,
        }
    }

    /// 複数IDを並列取得。失敗したIDは `Batch::failures` に回す
    ///
    /// 空の入力ではリクエストを発行しない
    pub async fn fetch_batch(
        self,
        ids: &[ArtworkId],
        signal: Option<&AbortSignal>,
    ) -> Result<Batch, ApiError> {
        if ids.is_empty() {
            return Ok(Batch::default());
        }
        let results = fetch_each(ids, |id| self.fetch_artwork(id, signal)).await;
        settle_each(ids, results)
    }
}

// ============================================
// 一覧リクエスト
// ============================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub query: String,
    pub limit: usize,
    pub include_no_image: bool,
}

impl ListRequest {
    /// 画像なしで落ちる分を見込んで多めに取る候補数
    pub fn candidate_count(&self) -> usize {
        self.limit.saturating_mul(3).max(self.limit.saturating_add(10))
    }
}

/// 画像なしを（設定に応じて）除外し、limit件に切り詰める
pub fn select_listing(candidates: Vec<Artwork>, request: &ListRequest) -> Vec<Artwork> {
    candidates
        .into_iter()
        .filter(|art| request.include_no_image || art.has_image())
        .take(request.limit)
        .collect()
}

// ============================================
// 並列取得と結果の集約
// ============================================

#[derive(Debug, Default)]
pub struct Batch {
    pub artworks: Vec<Artwork>,
    pub failures: Vec<(ArtworkId, ApiError)>,
}

/// IDごとの取得を同時に走らせ、入力順で結果を返す
pub async fn fetch_each<'a, F, Fut>(ids: &'a [ArtworkId], fetch: F) -> Vec<Result<Artwork, ApiError>>
where
    F: FnMut(&'a ArtworkId) -> Fut,
    Fut: Future<Output = Result<Artwork, ApiError>>,
{
    join_all(ids.iter().map(fetch)).await
}

/// 全件成功で `Ok`。中断が含まれていれば他のエラーより優先して `Aborted`
pub fn settle_all(results: Vec<Result<Artwork, ApiError>>) -> Result<Vec<Artwork>, ApiError> {
    if results.iter().any(|r| matches!(r, Err(ApiError::Aborted))) {
        return Err(ApiError::Aborted);
    }
    results.into_iter().collect()
}

/// 失敗を落として成功分だけ残す。中断が含まれていれば `Aborted`
pub fn settle_each(ids: &[ArtworkId], results: Vec<Result<Artwork, ApiError>>) -> Result<Batch, ApiError> {
    let mut batch = Batch::default();
    for (id, result) in ids.iter().zip(results) {
        match result {
            Ok(art) => batch.artworks.push(art),
            Err(ApiError::Aborted) => return Err(ApiError::Aborted),
            Err(e) => batch.failures.push((id.clone(), e)),
        }
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageRef;
    use futures_util::FutureExt;
    use std::cell::Cell;

    fn art(id: u64, with_image: bool) -> Artwork {
        Artwork {
            id: ArtworkId::from(id),
            title: format!("Artwork {}", id),
            image: with_image.then(|| ImageRef::Url(format!("https://img.example/{}.jpg", id))),
            ..Artwork::default()
        }
    }

    fn request(limit: usize) -> ListRequest {
        ListRequest { query: "painting".to_string(), limit, include_no_image: false }
    }

    #[test]
    fn test_candidate_count() {
        assert_eq!(request(12).candidate_count(), 36);
        assert_eq!(request(3).candidate_count(), 13);
        assert_eq!(request(0).candidate_count(), 10);
    }

    #[test]
    fn test_listing_yields_exactly_limit_when_enough_images() {
        let candidates: Vec<Artwork> = (0..36).map(|i| art(i, i % 3 != 0)).collect();
        let listing = select_listing(candidates, &request(12));
        assert_eq!(listing.len(), 12);
        assert!(listing.iter().all(Artwork::has_image));
        assert_eq!(listing[0].id, ArtworkId::from(1u64));
    }

    #[test]
    fn test_listing_short_when_few_images() {
        let candidates: Vec<Artwork> = (0..20).map(|i| art(i, i < 5)).collect();
        let listing = select_listing(candidates, &request(12));
        assert_eq!(listing.len(), 5);
    }

    #[test]
    fn test_listing_can_include_no_image() {
        let candidates: Vec<Artwork> = (0..20).map(|i| art(i, false)).collect();
        let req = ListRequest { include_no_image: true, ..request(8) };
        assert_eq!(select_listing(candidates, &req).len(), 8);
    }

    #[test]
    fn test_settle_all_fails_on_any_error() {
        let results = vec![Ok(art(1, true)), Err(ApiError::Status(404)), Ok(art(2, true))];
        assert_eq!(settle_all(results), Err(ApiError::Status(404)));
    }

    #[test]
    fn test_settle_all_prefers_abort() {
        let results = vec![Err(ApiError::Status(500)), Err(ApiError::Aborted)];
        assert_eq!(settle_all(results), Err(ApiError::Aborted));
    }

    #[test]
    fn test_settle_each_drops_failures_in_order() {
        let ids: Vec<ArtworkId> = [1u64, 2, 3].into_iter().map(ArtworkId::from).collect();
        let results = vec![Ok(art(1, true)), Err(ApiError::Status(404)), Ok(art(3, false))];
        let batch = settle_each(&ids, results).unwrap();
        let got: Vec<&str> = batch.artworks.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(got, vec!["1", "3"]);
        assert_eq!(batch.failures, vec![(ArtworkId::from(2u64), ApiError::Status(404))]);
    }

    #[test]
    fn test_settle_each_propagates_abort() {
        let ids = vec![ArtworkId::from(1u64), ArtworkId::from(2u64)];
        let results = vec![Ok(art(1, true)), Err(ApiError::Aborted)];
        assert!(settle_each(&ids, results).unwrap_err().is_aborted());
    }

    #[test]
    fn test_fetch_each_keeps_input_order() {
        let ids: Vec<ArtworkId> = [5u64, 9, 7].into_iter().map(ArtworkId::from).collect();
        let results = fetch_each(&ids, |id| {
            let id = id.clone();
            async move {
                if id.as_str() == "9" {
                    Err(ApiError::Network("offline".to_string()))
                } else {
                    Ok(Artwork { id, ..Artwork::default() })
                }
            }
        })
        .now_or_never()
        .unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().id.as_str(), "5");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().id.as_str(), "7");
    }

    #[test]
    fn test_fetch_batch_empty_makes_no_request() {
        // 空入力はHTTP層に到達しない（到達すればネイティブではパニックする）
        let batch = Collection::Met.fetch_batch(&[], None).now_or_never().unwrap().unwrap();
        assert!(batch.artworks.is_empty());
        assert!(batch.failures.is_empty());
    }

    #[test]
    fn test_fetch_each_not_called_for_empty_ids() {
        let calls = Cell::new(0);
        let results = fetch_each(&[], |_| {
            calls.set(calls.get() + 1);
            async { Ok(Artwork::default()) }
        })
        .now_or_never()
        .unwrap();
        assert!(results.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_collection_parse() {
        assert_eq!(Collection::parse("ARTIC"), Some(Collection::Artic));
        assert_eq!(Collection::parse(" met "), Some(Collection::Met));
        assert_eq!(Collection::parse("louvre"), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(404).to_string(), "HTTP 404");
        assert_eq!(ApiError::Network("offline".to_string()).to_string(), "Network error: offline");
    }
}
