//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements                       | Connects to            |
//! |-------------|----------------------------------|------------------------|
//! | `console`   | IndicatorSink, DeviceEnumerator  | Log output (bench use) |
//! | `telemetry` | TelemetrySource                  | Scripted value table   |
//! | `log_sink`  | EventSink                        | Log output             |
//! | `time`      | Clock                            | std thread sleep       |

pub mod console;
pub mod log_sink;
pub mod telemetry;
pub mod time;
