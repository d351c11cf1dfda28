#![allow(dead_code)]

use async_trait::async_trait;
use handling_fees::domain::entities::{CartLineItem, ClassFeeConfig, FeeConfiguration};
use handling_fees::domain::repositories::CartProvider;
use handling_fees::error::FeeError;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Once;

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Cart provider returning a fixed snapshot, standing in for the host cart.
pub struct FixedCartProvider {
    items: Vec<CartLineItem>,
}

impl FixedCartProvider {
    pub fn new(items: Vec<CartLineItem>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: vec![] }
    }
}

#[async_trait]
impl CartProvider for FixedCartProvider {
    async fn line_items(&self) -> Result<Vec<CartLineItem>, FeeError> {
        Ok(self.items.clone())
    }
}

pub fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn line(class: &str, quantity: i64) -> CartLineItem {
    CartLineItem::new(1, Some(class.to_string()), quantity)
}

pub fn config_with(classes: Vec<(&str, ClassFeeConfig)>) -> FeeConfiguration {
    FeeConfiguration {
        selected_classes: classes.iter().map(|(slug, _)| slug.to_string()).collect(),
        class_settings: classes
            .into_iter()
            .map(|(slug, settings)| (slug.to_string(), settings))
            .collect::<HashMap<_, _>>(),
    }
}
