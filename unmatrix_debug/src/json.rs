// Copyright 2026 the Unmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export_json`] writes the events held by a
//! [`RecorderSink`](crate::recorder::RecorderSink) as a pretty-printed JSON
//! array, one object per event with a `"name"` and an `"args"` object.

use std::io::{self, Write};

use serde_json::{Value, json};

use unmatrix_core::decompose::DecomposedTransform;

use crate::recorder::RecordedEvent;

/// Writes `events` to `writer` as a JSON array.
pub fn export_json(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(event_to_json).collect();
    serde_json::to_writer_pretty(writer, &values)?;
    Ok(())
}

/// Converts one decomposition into a JSON object keyed by component.
///
/// Vectors are written as arrays: `translation`, `scale`, `rotation` and
/// `skew` have three entries; `quaternion` is `[x, y, z, w]` and
/// `perspective` is `[m31, m32, m33, m34]`.
#[must_use]
pub fn decomposed_to_json(t: &DecomposedTransform) -> Value {
    let q = t.quaternion;
    json!({
        "translation": t.translation.to_array(),
        "scale": t.scale.to_array(),
        "rotation": t.rotation.to_array(),
        "quaternion": [q.x, q.y, q.z, q.w],
        "skew": t.skew.to_array(),
        "perspective": t.perspective.to_array(),
    })
}

fn event_to_json(event: &RecordedEvent) -> Value {
    let args = match event {
        RecordedEvent::Degenerate(e) => json!({
            "reason": e.reason.to_string(),
            "m44": e.m44,
        }),
        RecordedEvent::Reflection(e) => json!({
            "handedness": e.handedness,
        }),
        RecordedEvent::GimbalLock(e) => json!({
            "pitch": e.pitch,
            "roll": e.roll,
        }),
        RecordedEvent::Decomposed(t) => decomposed_to_json(t),
    };
    json!({
        "name": event.name(),
        "args": args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use unmatrix_core::decompose::decompose_traced;
    use unmatrix_core::trace::Tracer;
    use unmatrix_core::transform::Transform3d;

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        let mut tracer = Tracer::new(&mut rec);
        let _ = decompose_traced(Transform3d::from_scale(-2.0, 1.0, 1.0), &mut tracer);
        let mut singular = Transform3d::IDENTITY;
        singular.cols[3][3] = 0.0;
        let _ = decompose_traced(singular, &mut tracer);

        let mut out = Vec::new();
        export_json(rec.events(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 3);

        assert_eq!(parsed[0]["name"], "reflection");
        assert_eq!(parsed[1]["name"], "decomposed");
        // The reflection is folded into every scale axis.
        assert_eq!(parsed[1]["args"]["scale"][0], -2.0);
        assert_eq!(parsed[1]["args"]["scale"][1], -1.0);
        assert_eq!(parsed[2]["name"], "degenerate");
        assert_eq!(parsed[2]["args"]["m44"], 0.0);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export_json(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn decomposed_fields_are_arrays() {
        let value = decomposed_to_json(&DecomposedTransform::IDENTITY);
        assert_eq!(value["translation"], json!([0.0, 0.0, 0.0]));
        assert_eq!(value["quaternion"], json!([0.0, 0.0, 0.0, 1.0]));
        assert_eq!(value["perspective"], json!([0.0, 0.0, 0.0, 1.0]));
    }
}
