mod engine;

pub use engine::{load_document, PdfJsEngine, RenderEngine};

use dashmap::DashMap;
use std::{
    fmt,
    sync::{Arc, LazyLock},
};
use thiserror::Error;

static GLOBAL_PAGE_COUNT_CACHE: LazyLock<PageCountCache> = LazyLock::new(PageCountCache::default);

/// Windows wider than this get the fixed wide page width.
pub const WIDE_BREAKPOINT: f64 = 768.0;
pub const WIDE_PAGE_WIDTH: u32 = 800;
pub const PAGE_MARGIN: u32 = 60;
pub const INITIAL_PAGE_WIDTH: u32 = 600;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    #[error("failed to load {document_ref}: {reason}")]
    DocumentLoadFailure {
        document_ref: String,
        reason: String,
    },
    #[error("preview image unavailable: {0}")]
    MissingPreviewAsset(String),
    #[error("discarded result for superseded session {0}")]
    StaleCallback(SessionToken),
    #[error("page {page} is outside 1..={page_count}")]
    PageOutOfRange { page: u32, page_count: u32 },
    #[error("document is not ready")]
    NotReady,
}

impl PreviewError {
    pub fn load_failure(document_ref: &str, reason: impl Into<String>) -> Self {
        Self::DocumentLoadFailure {
            document_ref: document_ref.to_string(),
            reason: reason.into(),
        }
    }
}

/// Width in pixels to draw pages at for the given available window width.
pub fn page_width_for(available: f64) -> u32 {
    if available > WIDE_BREAKPOINT {
        WIDE_PAGE_WIDTH
    } else {
        (available.max(0.0) as u32).saturating_sub(PAGE_MARGIN)
    }
}

/// Identifies one open session; bumped on every `open()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SessionToken(u64);

impl SessionToken {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Page counts by document reference, shared by every card.
#[derive(Debug, Clone, Default)]
pub struct PageCountCache(Arc<DashMap<String, u32>>);

impl PageCountCache {
    pub fn global() -> Self {
        GLOBAL_PAGE_COUNT_CACHE.clone()
    }

    pub fn get(&self, document_ref: &str) -> Option<u32> {
        self.0.get(document_ref).map(|count| *count)
    }

    fn insert(&self, document_ref: &str, count: u32) {
        self.0.insert(document_ref.to_string(), count);
    }
}

/// A page-count load the caller must run and report back with `resolve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub token: SessionToken,
    pub document_ref: String,
}

/// One page to draw, at the width current when it was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRender {
    pub page: u32,
    pub width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    Closed,
    Loading,
    Ready(u32),
    Failed,
}

/// Where a click inside the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Surface,
}

/// Preview state for a single certificate card.
///
/// The session never talks to the rendering engine itself: `open()` hands
/// back a [`LoadRequest`] and the caller reports the outcome through
/// [`PreviewSession::resolve`]. Outcomes carrying a token other than the
/// in-flight one are dropped, so a slow load from an earlier open can never
/// overwrite a later one.
#[derive(Debug, Clone)]
pub struct PreviewSession {
    document_ref: String,
    cache: PageCountCache,
    is_open: bool,
    page_count: Option<u32>,
    load_error: bool,
    viewport_width: u32,
    token: SessionToken,
    in_flight: Option<SessionToken>,
}

impl PreviewSession {
    pub fn new(document_ref: impl Into<String>, cache: PageCountCache) -> Self {
        Self {
            document_ref: document_ref.into(),
            cache,
            is_open: false,
            page_count: None,
            load_error: false,
            viewport_width: INITIAL_PAGE_WIDTH,
            token: SessionToken::default(),
            in_flight: None,
        }
    }

    pub fn document_ref(&self) -> &str {
        &self.document_ref
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn page_count(&self) -> Option<u32> {
        self.page_count
    }

    pub fn load_error(&self) -> bool {
        self.load_error
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn state(&self) -> PreviewState {
        match (self.is_open, self.page_count, self.load_error) {
            (false, _, _) => PreviewState::Closed,
            (true, Some(count), _) => PreviewState::Ready(count),
            (true, None, true) => PreviewState::Failed,
            (true, None, false) => PreviewState::Loading,
        }
    }

    /// Opens the modal. Returns a load request unless the session is
    /// already open or the page count is known.
    pub fn open(&mut self) -> Option<LoadRequest> {
        if self.is_open {
            return None;
        }
        self.is_open = true;
        self.load_error = false;
        self.token = self.token.next();

        if let Some(count) = self.page_count.or_else(|| self.cache.get(&self.document_ref)) {
            self.page_count = Some(count);
            return None;
        }

        self.in_flight = Some(self.token);
        log::debug!("requesting page count for {} ({})", self.document_ref, self.token);
        Some(LoadRequest {
            token: self.token,
            document_ref: self.document_ref.clone(),
        })
    }

    /// Closes the modal, keeping any known page count for the next open.
    pub fn close(&mut self) {
        self.is_open = false;
        self.in_flight = None;
    }

    /// Only backdrop clicks close the modal. Returns whether it closed.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        if target == ClickTarget::Surface || !self.is_open {
            return false;
        }
        self.close();
        true
    }

    pub fn on_load_success(&mut self, token: SessionToken, count: u32) -> Result<(), PreviewError> {
        self.accept(token)?;
        self.page_count = Some(count);
        self.load_error = false;
        self.cache.insert(&self.document_ref, count);
        Ok(())
    }

    pub fn on_load_error(&mut self, token: SessionToken, error: &PreviewError) -> Result<(), PreviewError> {
        self.accept(token)?;
        log::warn!("{error}");
        self.load_error = true;
        Ok(())
    }

    /// Applies the outcome of a [`LoadRequest`].
    pub fn resolve(
        &mut self,
        token: SessionToken,
        outcome: Result<u32, PreviewError>,
    ) -> Result<(), PreviewError> {
        match outcome {
            Ok(count) => self.on_load_success(token, count),
            Err(e) => self.on_load_error(token, &e),
        }
    }

    fn accept(&mut self, token: SessionToken) -> Result<(), PreviewError> {
        if self.in_flight != Some(token) {
            log::debug!("ignoring load result for {} ({token})", self.document_ref);
            return Err(PreviewError::StaleCallback(token));
        }
        self.in_flight = None;
        Ok(())
    }

    /// Returns whether the page width changed.
    pub fn recompute_viewport_width(&mut self, available: f64) -> bool {
        let width = page_width_for(available);
        let changed = width != self.viewport_width;
        self.viewport_width = width;
        changed
    }

    pub fn render_page(&self, page: u32) -> Result<PageRender, PreviewError> {
        let page_count = match self.state() {
            PreviewState::Ready(count) => count,
            _ => return Err(PreviewError::NotReady),
        };
        if page == 0 || page > page_count {
            return Err(PreviewError::PageOutOfRange { page, page_count });
        }
        Ok(PageRender {
            page,
            width: self.viewport_width,
        })
    }

    /// Every page in reading order, empty unless the session is ready.
    pub fn pages(&self) -> Vec<PageRender> {
        match self.state() {
            PreviewState::Ready(count) => (1..=count).filter_map(|n| self.render_page(n).ok()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Image sources to try in order for a card thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    candidates: Vec<String>,
    current: usize,
}

impl Thumbnail {
    pub fn new(primary: Option<String>, fallback: Option<String>) -> Self {
        Self {
            candidates: primary
                .iter()
                .cloned()
                .chain(fallback.filter(|f| Some(f) != primary.as_ref()))
                .collect(),
            current: 0,
        }
    }

    /// `None` once every source failed; show the placeholder instead.
    pub fn src(&self) -> Option<&str> {
        self.candidates.get(self.current).map(String::as_str)
    }

    /// Moves on to the next source after the current one failed to load.
    pub fn on_error(&mut self) -> PreviewError {
        let failed = self.src().unwrap_or_default().to_string();
        self.current = (self.current + 1).min(self.candidates.len());
        PreviewError::MissingPreviewAsset(failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "/certificates/frontend.pdf";

    fn session() -> PreviewSession {
        PreviewSession::new(DOC, PageCountCache::default())
    }

    #[test]
    fn test_initial_state() {
        let s = session();
        assert!(!s.is_open());
        assert_eq!(s.page_count(), None);
        assert!(!s.load_error());
        assert_eq!(s.viewport_width(), INITIAL_PAGE_WIDTH);
        assert_eq!(s.state(), PreviewState::Closed);
        assert!(s.pages().is_empty());
    }

    #[test]
    fn test_open_issues_single_request() {
        let mut s = session();
        let request = s.open().expect("first open should request a load");
        assert_eq!(request.document_ref, DOC);
        assert_eq!(s.state(), PreviewState::Loading);

        // opening again while open changes nothing
        let before = (s.is_open(), s.page_count(), s.load_error(), s.state());
        assert_eq!(s.open(), None);
        assert_eq!(before, (s.is_open(), s.page_count(), s.load_error(), s.state()));

        s.on_load_success(request.token, 3).unwrap();
        assert_eq!(s.state(), PreviewState::Ready(3));
    }

    #[test]
    fn test_reopen_uses_cached_count() {
        let mut s = session();
        let request = s.open().unwrap();
        s.resolve(request.token, Ok(5)).unwrap();
        s.close();
        assert_eq!(s.state(), PreviewState::Closed);
        assert_eq!(s.page_count(), Some(5));

        assert_eq!(s.open(), None);
        assert_eq!(s.state(), PreviewState::Ready(5));
        assert_eq!(s.pages().len(), 5);
    }

    #[test]
    fn test_cache_shared_between_sessions() {
        let cache = PageCountCache::default();
        let mut first = PreviewSession::new(DOC, cache.clone());
        let request = first.open().unwrap();
        first.resolve(request.token, Ok(2)).unwrap();
        assert_eq!(cache.get(DOC), Some(2));

        let mut second = PreviewSession::new(DOC, cache.clone());
        assert_eq!(second.open(), None);
        assert_eq!(second.state(), PreviewState::Ready(2));

        let mut other = PreviewSession::new("/certificates/other.pdf", cache);
        assert!(other.open().is_some());
    }

    #[test]
    fn test_stale_callback_ignored() {
        let mut s = session();
        let a = s.open().unwrap();
        s.close();
        let b = s.open().unwrap();
        assert_ne!(a.token, b.token);

        let err = s.on_load_success(a.token, 9).unwrap_err();
        assert_eq!(err, PreviewError::StaleCallback(a.token));
        assert_eq!(s.state(), PreviewState::Loading);
        assert_eq!(s.page_count(), None);

        s.on_load_success(b.token, 2).unwrap();
        assert_eq!(s.state(), PreviewState::Ready(2));
    }

    #[test]
    fn test_late_callback_after_close() {
        let mut s = session();
        let request = s.open().unwrap();
        s.close();

        let failure = PreviewError::load_failure(DOC, "boom");
        assert!(s.on_load_error(request.token, &failure).is_err());
        // no error flash after close
        assert!(!s.load_error());
        assert_eq!(s.state(), PreviewState::Closed);
    }

    #[test]
    fn test_result_delivered_once() {
        let mut s = session();
        let request = s.open().unwrap();
        s.on_load_success(request.token, 4).unwrap();
        assert!(matches!(
            s.on_load_success(request.token, 7),
            Err(PreviewError::StaleCallback(_))
        ));
        assert_eq!(s.page_count(), Some(4));
    }

    #[test]
    fn test_failure_then_retry() {
        let cache = PageCountCache::default();
        let mut s = PreviewSession::new(DOC, cache.clone());
        let request = s.open().unwrap();
        s.resolve(request.token, Err(PreviewError::load_failure(DOC, "404")))
            .unwrap();
        assert_eq!(s.state(), PreviewState::Failed);
        assert_eq!(s.page_count(), None);
        assert!(s.pages().is_empty());
        assert_eq!(cache.get(DOC), None);

        s.close();
        assert_eq!(s.state(), PreviewState::Closed);

        let retry = s.open().expect("reopening after a failure retries");
        assert!(!s.load_error());
        assert_eq!(s.state(), PreviewState::Loading);
        s.resolve(retry.token, Ok(1)).unwrap();
        assert_eq!(s.state(), PreviewState::Ready(1));
    }

    #[test]
    fn test_failure_isolated_to_one_card() {
        let cache = PageCountCache::default();
        let mut broken = PreviewSession::new("/certificates/broken.pdf", cache.clone());
        let mut healthy = PreviewSession::new(DOC, cache);

        let b = broken.open().unwrap();
        let h = healthy.open().unwrap();
        broken
            .resolve(b.token, Err(PreviewError::load_failure("/certificates/broken.pdf", "corrupt")))
            .unwrap();

        assert_eq!(broken.state(), PreviewState::Failed);
        assert_eq!(healthy.state(), PreviewState::Loading);
        healthy.resolve(h.token, Ok(2)).unwrap();
        assert_eq!(healthy.state(), PreviewState::Ready(2));
        healthy.close();
        assert_eq!(healthy.open(), None);
    }

    #[test]
    fn test_click_containment() {
        let mut s = session();
        assert!(!s.click(ClickTarget::Backdrop));
        s.open();
        assert!(!s.click(ClickTarget::Surface));
        assert!(s.is_open());
        assert!(s.click(ClickTarget::Backdrop));
        assert!(!s.is_open());
    }

    #[test]
    fn test_page_width_boundary() {
        assert_eq!(page_width_for(768.0), 708);
        assert_eq!(page_width_for(769.0), 800);
        assert_eq!(page_width_for(1024.0), 800);
        assert_eq!(page_width_for(500.0), 440);
        assert_eq!(page_width_for(40.0), 0);
        assert_eq!(page_width_for(f64::INFINITY), 800);
    }

    #[test]
    fn test_recompute_viewport_width() {
        let mut s = session();
        assert!(s.recompute_viewport_width(1024.0));
        assert_eq!(s.viewport_width(), 800);
        assert!(!s.recompute_viewport_width(1200.0));
        assert!(s.recompute_viewport_width(500.0));
        assert_eq!(s.viewport_width(), 440);
    }

    #[test]
    fn test_render_page_bounds() {
        let mut s = session();
        assert_eq!(s.render_page(1), Err(PreviewError::NotReady));

        let request = s.open().unwrap();
        assert_eq!(s.render_page(1), Err(PreviewError::NotReady));
        s.resolve(request.token, Ok(2)).unwrap();
        s.recompute_viewport_width(1024.0);

        assert_eq!(s.render_page(1), Ok(PageRender { page: 1, width: 800 }));
        assert_eq!(s.render_page(2), Ok(PageRender { page: 2, width: 800 }));
        assert_eq!(
            s.render_page(0),
            Err(PreviewError::PageOutOfRange { page: 0, page_count: 2 })
        );
        assert_eq!(
            s.render_page(3),
            Err(PreviewError::PageOutOfRange { page: 3, page_count: 2 })
        );

        s.close();
        assert_eq!(s.render_page(1), Err(PreviewError::NotReady));
    }

    #[test]
    fn test_thumbnail_fallback_chain() {
        let mut thumb = Thumbnail::new(
            Some("/images/cocopen.png".to_string()),
            Some("/images/placeholder-project.jpg".to_string()),
        );
        assert_eq!(thumb.src(), Some("/images/cocopen.png"));

        let err = thumb.on_error();
        assert_eq!(err, PreviewError::MissingPreviewAsset("/images/cocopen.png".to_string()));
        assert_eq!(thumb.src(), Some("/images/placeholder-project.jpg"));

        thumb.on_error();
        assert_eq!(thumb.src(), None);
        // further errors stay on the placeholder
        thumb.on_error();
        assert_eq!(thumb.src(), None);

        assert_eq!(Thumbnail::new(None, None).src(), None);

        let mut same = Thumbnail::new(
            Some("/images/placeholder-project.jpg".to_string()),
            Some("/images/placeholder-project.jpg".to_string()),
        );
        same.on_error();
        assert_eq!(same.src(), None);
    }
}
