// src/progress.rs
/// Lightweight progress reporting used by long-running stages (enrichment).
/// The CLI implements this to surface status on the console.
pub trait Progress {
    /// Called at the start with the total number of items.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called periodically with the number of items processed so far.
    fn item_done(&mut self, _done: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Progress sink that reports through the log facade.
#[derive(Debug, Default)]
pub struct LogProgress {
    total: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        logd!("Enriching {total} jobs");
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn item_done(&mut self, done: usize) {
        logf!("Enriched {done}/{} jobs", self.total);
    }

    fn finish(&mut self) {
        logd!("Enrichment finished ({} jobs)", self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) { self.events.push(format!("begin {total}")); }
        fn item_done(&mut self, done: usize) { self.events.push(format!("done {done}")); }
        fn finish(&mut self) { self.events.push(s!("finish")); }
    }

    #[test]
    fn defaults_are_no_ops_and_overrides_fire() {
        let mut null = NullProgress;
        null.begin(3);
        null.item_done(1);
        null.finish();

        let mut r = Recorder::default();
        let p: &mut dyn Progress = &mut r;
        p.begin(2);
        p.log("ignored");
        p.item_done(2);
        p.finish();
        assert_eq!(r.events, ["begin 2", "done 2", "finish"]);
    }
}
