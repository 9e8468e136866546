//! Default component catalog and the startup seed loader.
//!
//! The same four entries double as the read-only catalog served when no
//! document store is available.

use chrono::Utc;

use crate::collections::COMPONENTS;
use crate::models::component::{Component, Specifications, DEFAULT_AVAILABILITY};
use crate::models::to_document;
use crate::store::{DocumentStore, Query, StoreError};

fn specs(pairs: &[(&str, &str)]) -> Option<Specifications> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn entry(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    price_range: &str,
    specifications: &[(&str, &str)],
) -> Component {
    Component {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price_range: price_range.to_string(),
        availability: DEFAULT_AVAILABILITY.to_string(),
        specifications: specs(specifications),
        created_at: None,
        updated_at: None,
    }
}

/// The built-in catalog, without timestamps.
pub fn default_components() -> Vec<Component> {
    vec![
        entry(
            "arduino-uno",
            "Arduino Uno R3",
            "A microcontroller board based on the ATmega328P. Perfect for beginners and prototyping.",
            "Microcontrollers",
            "$20-30",
            &[
                ("microcontroller", "ATmega328P"),
                ("operating_voltage", "5V"),
                ("input_voltage", "7-12V"),
                ("digital_io_pins", "14"),
                ("analog_input_pins", "6"),
                ("flash_memory", "32KB"),
            ],
        ),
        entry(
            "esp32",
            "ESP32 DevKit",
            "Wi-Fi and Bluetooth enabled microcontroller with dual-core processor.",
            "Microcontrollers",
            "$15-25",
            &[
                ("processor", "Dual-core Tensilica LX6"),
                ("frequency", "240MHz"),
                ("flash_memory", "4MB"),
                ("sram", "520KB"),
                ("wifi", "802.11 b/g/n"),
                ("bluetooth", "v4.2 BR/EDR and BLE"),
            ],
        ),
        entry(
            "hc-sr04",
            "HC-SR04 Ultrasonic Sensor",
            "Ultrasonic distance sensor with 2-400cm measurement range.",
            "Sensors",
            "$2-5",
            &[
                ("operating_voltage", "5V"),
                ("measuring_range", "2cm - 4m"),
                ("measuring_angle", "15°"),
                ("trigger_pulse", "10µs TTL pulse"),
                ("echo_pulse", "Proportional to distance"),
            ],
        ),
        entry(
            "dht22",
            "DHT22 Temperature & Humidity Sensor",
            "Digital sensor for measuring temperature and humidity with high accuracy.",
            "Sensors",
            "$5-10",
            &[
                ("operating_voltage", "3.3-6V"),
                ("temperature_range", "-40°C to 80°C"),
                ("humidity_range", "0-100% RH"),
                ("accuracy_temperature", "±0.5°C"),
                ("accuracy_humidity", "±2-5% RH"),
            ],
        ),
    ]
}

/// Insert the default catalog if the components collection is empty.
///
/// Returns the number of documents written: the catalog size on first run,
/// zero when the collection already holds anything.
pub async fn seed_default_components(store: &dyn DocumentStore) -> Result<usize, StoreError> {
    let existing = store.query(COMPONENTS, &Query::new().limit(1)).await?;
    if !existing.is_empty() {
        tracing::debug!("Components collection not empty, skipping seed");
        return Ok(0);
    }

    let now = Utc::now();
    let catalog = default_components();
    for mut component in catalog.iter().cloned() {
        component.created_at = Some(now);
        component.updated_at = Some(now);
        store
            .set(COMPONENTS, &component.id, &to_document(&component)?)
            .await?;
    }

    tracing::info!(count = catalog.len(), "Seeded default components");
    Ok(catalog.len())
}
