//! 複数の Log へ同じレコードを流す Log 実装

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::sync::Arc;

/// 複数の Log に順に書き出す。1 つが失敗しても残りには書き、最初のエラーを返す。
pub struct CompositeLog {
    inner: Vec<Arc<dyn Log>>,
}

impl CompositeLog {
    pub fn new(inner: Vec<Arc<dyn Log>>) -> Self {
        Self { inner }
    }
}

impl Log for CompositeLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for log in &self.inner {
            if let Err(e) = log.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::LogLevel;
    use std::sync::Mutex;

    struct RecordingLog(Mutex<Vec<String>>);

    impl Log for RecordingLog {
        fn log(&self, record: &LogRecord) -> Result<(), Error> {
            self.0.lock().unwrap().push(record.message.clone());
            Ok(())
        }
    }

    struct FailingLog;

    impl Log for FailingLog {
        fn log(&self, _record: &LogRecord) -> Result<(), Error> {
            Err(Error::io_msg("disk full"))
        }
    }

    #[test]
    fn test_composite_continues_after_failure() {
        let rec = Arc::new(RecordingLog(Mutex::new(Vec::new())));
        let sinks: Vec<Arc<dyn Log>> = vec![Arc::new(FailingLog), rec.clone()];
        let log = CompositeLog::new(sinks);
        let result = log.log(&LogRecord::new(LogLevel::Info, "hello"));
        assert!(result.is_err());
        assert_eq!(*rec.0.lock().unwrap(), vec!["hello".to_string()]);
    }
}
