//! Fuentes de prueba compartidas por los tests de integración.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use assetinject_rust::{DataSource, SourceError};
use async_trait::async_trait;
use tokio::sync::Notify;

/// Fuente con valores fijos, retardo opcional por clave y registro de llamadas.
#[derive(Default)]
pub struct ScriptedSource {
    values: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    failing: Vec<String>,
    gates: HashMap<String, Arc<Notify>>,
    calls: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn delayed(mut self, key: &str, value: &str, delay: Duration) -> Self {
        self.delays.insert(key.into(), delay);
        self.value(key, value)
    }

    /// La resolución de `key` no termina hasta que se notifique `gate`.
    pub fn gated(mut self, key: &str, value: &str, gate: Arc<Notify>) -> Self {
        self.gates.insert(key.into(), gate);
        self.value(key, value)
    }

    pub fn failing(mut self, key: &str) -> Self {
        self.failing.push(key.into());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, key: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|k| *k == key).count()
    }

    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch(&self, key: &str) -> Result<String, SourceError> {
        self.calls.lock().unwrap().push(key.to_string());
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(gate) = self.gates.get(key) {
            gate.notified().await;
        }
        self.completed.lock().unwrap().push(key.to_string());
        if self.failing.iter().any(|k| k == key) {
            return Err(SourceError::Remote(format!("rechazado: {key}")));
        }
        self.values.get(key).cloned().ok_or_else(|| SourceError::NotFound(key.to_string()))
    }
}

pub fn shared(source: ScriptedSource) -> (Arc<ScriptedSource>, Arc<dyn DataSource>) {
    let concrete = Arc::new(source);
    let erased: Arc<dyn DataSource> = concrete.clone();
    (concrete, erased)
}
