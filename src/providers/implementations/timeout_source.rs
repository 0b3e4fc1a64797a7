use std::time::Duration;

use async_trait::async_trait;

use crate::errors::SourceError;
use crate::providers::DataSource;

/// Envuelve otra fuente limitando la duración de cada `fetch`.
#[derive(Debug, Clone)]
pub struct TimeoutDataSource<S> {
    inner: S,
    limit: Duration,
}

impl<S: DataSource> TimeoutDataSource<S> {
    pub fn new(inner: S, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl<S: DataSource> DataSource for TimeoutDataSource<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn fetch(&self, key: &str) -> Result<String, SourceError> {
        match tokio::time::timeout(self.limit, self.inner.fetch(key)).await {
            Ok(res) => res,
            Err(_) => Err(SourceError::Timeout { name: key.to_string(), elapsed: self.limit }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::implementations::StaticDataSource;

    struct Slow;

    #[async_trait]
    impl DataSource for Slow {
        fn name(&self) -> &str { "slow" }
        async fn fetch(&self, _key: &str) -> Result<String, SourceError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(String::new())
        }
    }

    #[tokio::test]
    async fn test_times_out() {
        let src = TimeoutDataSource::new(Slow, Duration::from_millis(20));
        let err = src.fetch("x").await.unwrap_err();
        assert!(matches!(err, SourceError::Timeout { ref name, .. } if name == "x"));
    }

    #[tokio::test]
    async fn test_passes_through() {
        let src = TimeoutDataSource::new(StaticDataSource::demo(), Duration::from_secs(1));
        assert_eq!(src.name(), "static");
        assert!(src.fetch("header").await.is_ok());
    }
}
