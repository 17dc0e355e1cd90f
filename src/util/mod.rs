use std::sync::atomic::{AtomicU64, Ordering};

const RANDOM_SUFFIX_LEN: usize = 6;
const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Formats `ms` with the browser locale. Native builds fall back to the raw value.
#[cfg(target_arch = "wasm32")]
pub fn format_local_datetime(ms: i64) -> String {
    let d = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms as f64));
    String::from(d.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_local_datetime(ms: i64) -> String {
    ms.to_string()
}

pub(crate) fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

static FALLBACK_COUNTER: AtomicU64 = AtomicU64::new(1);

fn random_suffix() -> String {
    let mut buf = [0u8; RANDOM_SUFFIX_LEN];
    if getrandom::getrandom(&mut buf).is_err() {
        // No entropy source: fold a process-wide counter in instead.
        let counter = FALLBACK_COUNTER.fetch_add(1, Ordering::SeqCst);
        for (i, b) in buf.iter_mut().enumerate() {
            *b = (counter >> (i * 8)) as u8;
        }
    }
    buf.iter().map(|b| BASE36[(*b % 36) as usize] as char).collect()
}

/// Base-36 timestamp followed by six random base-36 characters, upper-case.
pub fn generate_note_id(now: i64) -> String {
    format!("{}{}", to_base36(now.max(0) as u64), random_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn test_generate_note_id_shape() {
        let id = generate_note_id(1_700_000_000_000);
        let prefix = to_base36(1_700_000_000_000);
        assert!(id.starts_with(&prefix));
        assert_eq!(id.len(), prefix.len() + RANDOM_SUFFIX_LEN);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_now_ms_is_positive() {
        assert!(now_ms() > 0);
    }
}
