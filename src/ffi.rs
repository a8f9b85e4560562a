//! C ABI over JSON strings.
//!
//! Enabled with the `ffi` feature. The request is a [`DeliveryInstance`]
//! with an optional `config` object; the response is either
//! `{"route": ..., "stops": [...], "total_time": ...}` or `{"error": ...}`.
//! Strings returned by this module must be released with
//! [`u_courier_free_string`].

use std::ffi::{CStr, CString};

use libc::c_char;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::OptimizerConfig;
use crate::error::Result;
use crate::instance::DeliveryInstance;
use crate::optimizer::RouteOptimizer;

#[derive(Deserialize)]
struct Request {
    #[serde(flatten)]
    instance: DeliveryInstance,
    #[serde(default)]
    config: OptimizerConfig,
}

fn solve(json: &str) -> Result<Value> {
    let request: Request = serde_json::from_str(json)?;
    request.instance.validate_names()?;
    let best = RouteOptimizer::new(request.config)?
        .find_best_route(&request.instance.start, &request.instance.orders)?;
    Ok(json!({
        "route": best.route_string(),
        "stops": best.stops(),
        "total_time": best.total_time(),
    }))
}

fn respond(json: &str) -> String {
    match solve(json) {
        Ok(value) => value.to_string(),
        Err(err) => json!({ "error": err.to_string() }).to_string(),
    }
}

/// Finds the best route for a JSON-encoded instance.
///
/// Returns a newly allocated JSON string, or null if `instance_json` is null
/// or not valid UTF-8.
///
/// # Safety
///
/// `instance_json` must be null or point to a NUL-terminated string that
/// stays valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn u_courier_find_best_route(instance_json: *const c_char) -> *mut c_char {
    if instance_json.is_null() {
        return std::ptr::null_mut();
    }
    let Ok(input) = CStr::from_ptr(instance_json).to_str() else {
        return std::ptr::null_mut();
    };
    match CString::new(respond(input)) {
        Ok(out) => out.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Releases a string returned by this module. Null is ignored.
///
/// # Safety
///
/// `s` must be null or a pointer previously returned by
/// [`u_courier_find_best_route`] that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn u_courier_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(input: &str) -> Value {
        let c_input = CString::new(input).expect("no interior NUL");
        unsafe {
            let out = u_courier_find_best_route(c_input.as_ptr());
            assert!(!out.is_null());
            let text = CStr::from_ptr(out).to_str().expect("utf-8").to_string();
            u_courier_free_string(out);
            serde_json::from_str(&text).expect("json response")
        }
    }

    #[test]
    fn test_sample_request() {
        let json = DeliveryInstance::sample()
            .expect("valid")
            .to_json()
            .expect("serializable");
        let resp = call(&json);
        assert_eq!(resp["route"], "delivery_executive -> r1 -> r2 -> c2 -> c1");
        assert_eq!(resp["stops"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn test_config_is_applied() {
        let json = r#"{
            "start": {"name": "s", "latitude": 1.0, "longitude": 1.0},
            "orders": [],
            "config": {"speed_kmh": -3.0}
        }"#;
        let resp = call(json);
        assert!(resp["error"]
            .as_str()
            .is_some_and(|e| e.contains("invalid configuration")));
    }

    #[test]
    fn test_malformed_request() {
        let resp = call("not json");
        assert!(resp["error"].is_string());
    }

    #[test]
    fn test_null_input() {
        unsafe {
            assert!(u_courier_find_best_route(std::ptr::null()).is_null());
            u_courier_free_string(std::ptr::null_mut());
        }
    }
}
