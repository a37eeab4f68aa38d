use serde::{Deserialize, Serialize};

/// Editor placement stored on a record under the `editor` key.
///
/// Only `x` and `y` are guaranteed; records created outside the graph view
/// may carry a bare position and leave size and port count to the editor.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct EditorLayout {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<usize>,
}

impl EditorLayout {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn full(x: f32, y: f32, w: f32, h: f32, ports: usize) -> Self {
        Self {
            x,
            y,
            w: Some(w),
            h: Some(h),
            ports: Some(ports),
        }
    }
}
