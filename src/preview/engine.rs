use std::future::Future;

use web_sys::HtmlCanvasElement;

use super::{LoadRequest, PageRender, PreviewError};

/// Something that can count and draw the pages of a document.
pub trait RenderEngine {
    type Surface;

    fn load(&self, document_ref: &str) -> impl Future<Output = Result<u32, PreviewError>>;

    fn render_page(
        &self,
        document_ref: &str,
        page: PageRender,
        surface: &Self::Surface,
    ) -> impl Future<Output = Result<(), PreviewError>>;
}

/// Runs a [`LoadRequest`] against the engine. An empty document counts as a
/// load failure.
pub async fn load_document<E: RenderEngine>(
    engine: &E,
    request: &LoadRequest,
) -> Result<u32, PreviewError> {
    match engine.load(&request.document_ref).await {
        Ok(0) => Err(PreviewError::load_failure(
            &request.document_ref,
            "document has no pages",
        )),
        outcome => outcome,
    }
}

#[cfg(feature = "hydrate")]
mod bindings {
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    #[wasm_bindgen(module = "/js/pdf_engine.js")]
    extern "C" {
        #[wasm_bindgen(catch, js_name = loadPageCount)]
        pub async fn load_page_count(url: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch, js_name = renderPage)]
        pub async fn render_page(
            url: &str,
            page: u32,
            width: u32,
            canvas: &HtmlCanvasElement,
        ) -> Result<JsValue, JsValue>;
    }

    pub fn describe(err: JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }
}

/// pdf.js in the browser, drawing flattened pages onto canvases.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfJsEngine;

impl RenderEngine for PdfJsEngine {
    type Surface = HtmlCanvasElement;

    #[cfg(feature = "hydrate")]
    async fn load(&self, document_ref: &str) -> Result<u32, PreviewError> {
        let value = bindings::load_page_count(document_ref)
            .await
            .map_err(|e| PreviewError::load_failure(document_ref, bindings::describe(e)))?;
        value
            .as_f64()
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map(|n| n as u32)
            .ok_or_else(|| PreviewError::load_failure(document_ref, "page count is not a number"))
    }

    #[cfg(not(feature = "hydrate"))]
    async fn load(&self, document_ref: &str) -> Result<u32, PreviewError> {
        Err(PreviewError::load_failure(
            document_ref,
            "documents can only be rendered in the browser",
        ))
    }

    #[cfg(feature = "hydrate")]
    async fn render_page(
        &self,
        document_ref: &str,
        page: PageRender,
        surface: &HtmlCanvasElement,
    ) -> Result<(), PreviewError> {
        bindings::render_page(document_ref, page.page, page.width, surface)
            .await
            .map(|_| ())
            .map_err(|e| PreviewError::load_failure(document_ref, bindings::describe(e)))
    }

    #[cfg(not(feature = "hydrate"))]
    async fn render_page(
        &self,
        document_ref: &str,
        _page: PageRender,
        _surface: &HtmlCanvasElement,
    ) -> Result<(), PreviewError> {
        Err(PreviewError::load_failure(
            document_ref,
            "documents can only be rendered in the browser",
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;
    use crate::preview::{PageCountCache, PreviewSession, PreviewState};

    #[derive(Default)]
    struct FakeEngine {
        documents: HashMap<String, u32>,
        loads: RefCell<Vec<String>>,
        renders: RefCell<Vec<(String, PageRender)>>,
    }

    impl FakeEngine {
        fn with_document(document_ref: &str, pages: u32) -> Self {
            let mut engine = Self::default();
            engine.documents.insert(document_ref.to_string(), pages);
            engine
        }
    }

    impl RenderEngine for FakeEngine {
        type Surface = ();

        async fn load(&self, document_ref: &str) -> Result<u32, PreviewError> {
            self.loads.borrow_mut().push(document_ref.to_string());
            self.documents
                .get(document_ref)
                .copied()
                .ok_or_else(|| PreviewError::load_failure(document_ref, "not found"))
        }

        async fn render_page(
            &self,
            document_ref: &str,
            page: PageRender,
            _surface: &(),
        ) -> Result<(), PreviewError> {
            self.renders
                .borrow_mut()
                .push((document_ref.to_string(), page));
            Ok(())
        }
    }

    async fn open_and_load(session: &mut PreviewSession, engine: &FakeEngine) {
        if let Some(request) = session.open() {
            let outcome = load_document(engine, &request).await;
            session
                .resolve(request.token, outcome)
                .expect("load result should belong to the open session");
        }
    }

    async fn render_all(session: &PreviewSession, engine: &FakeEngine) {
        for page in session.pages() {
            engine
                .render_page(session.document_ref(), page, &())
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_empty_document_is_failure() {
        let engine = FakeEngine::with_document("/empty.pdf", 0);
        let request = LoadRequest {
            token: Default::default(),
            document_ref: "/empty.pdf".to_string(),
        };
        let err = load_document(&engine, &request).await.unwrap_err();
        assert!(matches!(err, PreviewError::DocumentLoadFailure { .. }));
    }

    #[tokio::test]
    async fn test_missing_document_fails_session() {
        let engine = FakeEngine::default();
        let mut session = PreviewSession::new("/missing.pdf", PageCountCache::default());
        open_and_load(&mut session, &engine).await;
        assert_eq!(session.state(), PreviewState::Failed);
        render_all(&session, &engine).await;
        assert!(engine.renders.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_certificate_preview_walkthrough() {
        let doc = "/certificates/frontend.pdf";
        let engine = FakeEngine::with_document(doc, 2);
        let mut session = PreviewSession::new(doc, PageCountCache::default());
        session.recompute_viewport_width(1024.0);

        // click the card
        let request = session.open().expect("first open loads");
        assert_eq!(session.state(), PreviewState::Loading);
        let outcome = load_document(&engine, &request).await;
        session.resolve(request.token, outcome).unwrap();
        assert_eq!(session.state(), PreviewState::Ready(2));

        render_all(&session, &engine).await;
        assert_eq!(
            *engine.renders.borrow(),
            vec![
                (doc.to_string(), PageRender { page: 1, width: 800 }),
                (doc.to_string(), PageRender { page: 2, width: 800 }),
            ]
        );

        // shrink the window
        engine.renders.borrow_mut().clear();
        session.recompute_viewport_width(500.0);
        assert_eq!(session.viewport_width(), 440);
        render_all(&session, &engine).await;
        assert!(engine.renders.borrow().iter().all(|(_, p)| p.width == 440));

        // click outside, then reopen
        session.click(crate::preview::ClickTarget::Backdrop);
        assert_eq!(session.state(), PreviewState::Closed);
        open_and_load(&mut session, &engine).await;
        assert_eq!(session.state(), PreviewState::Ready(2));
        assert_eq!(*engine.loads.borrow(), vec![doc.to_string()]);
    }
}
