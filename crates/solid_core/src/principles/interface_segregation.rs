//! Interface Segregation: implementers depend only on the methods they use.

/// One fat trait; every document must implement open, save and close.
pub mod bad {
    use log::debug;

    pub trait Document {
        fn open(&self);
        fn save(&self);
        fn close(&self);
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct WordDocument;

    impl Document for WordDocument {
        fn open(&self) {
            debug!("event=document_open module=isp variant=bad status=noop");
        }

        fn save(&self) {
            debug!("event=document_save module=isp variant=bad status=noop");
        }

        fn close(&self) {
            debug!("event=document_close module=isp variant=bad status=noop");
        }
    }
}

/// Single-method capabilities composed per implementer.
pub mod good {
    use log::debug;

    pub trait Openable {
        fn open(&self);
    }

    pub trait Savable {
        fn save(&self);
    }

    pub trait Closable {
        fn close(&self);
    }

    /// Full editor document: opens, saves and closes.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct WordDocument;

    impl Openable for WordDocument {
        fn open(&self) {
            debug!("event=document_open module=isp variant=good status=noop");
        }
    }

    impl Savable for WordDocument {
        fn save(&self) {
            debug!("event=document_save module=isp variant=good status=noop");
        }
    }

    impl Closable for WordDocument {
        fn close(&self) {
            debug!("event=document_close module=isp variant=good status=noop");
        }
    }

    /// Viewer-only document. Implements `Openable` and nothing else.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ReadOnlyDocument;

    impl Openable for ReadOnlyDocument {
        fn open(&self) {
            debug!("event=document_open module=isp variant=good kind=read_only status=noop");
        }
    }

    /// Opens anything that can be opened.
    pub fn open_all(documents: &[&dyn Openable]) -> usize {
        for document in documents {
            document.open();
        }
        documents.len()
    }
}
