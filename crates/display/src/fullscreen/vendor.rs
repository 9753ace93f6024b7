//! Vendor-prefixed fullscreen names.
//!
//! Names and ordering must match the browsers exactly. Lookups walk these
//! tables front to back and stop at the first entry the host has.

/// Origin of a fullscreen API name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Standard,
    Mozilla,
    Microsoft,
    WebKit,
}

/// One vendor-specific method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostMethod {
    pub vendor: Vendor,
    pub name: &'static str,
}

impl HostMethod {
    const fn new(vendor: Vendor, name: &'static str) -> Self {
        Self { vendor, name }
    }
}

/// A single capability check against the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportProbe {
    /// A document property that is truthy when fullscreen is available.
    Property(&'static str),
    /// A method looked up on a freshly created element.
    ElementMethod(&'static str),
}

pub const SUPPORT_PROBES: [SupportProbe; 6] = [
    SupportProbe::Property("fullscreenEnabled"),
    SupportProbe::Property("mozFullScreenEnabled"),
    SupportProbe::Property("msFullscreenEnabled"),
    SupportProbe::Property("webkitSupportsFullscreen"),
    SupportProbe::Property("webkitFullscreenEnabled"),
    SupportProbe::ElementMethod("webkitRequestFullScreen"),
];

/// Document properties that are truthy while something is fullscreen.
pub const ACTIVE_FLAGS: [&str; 5] = [
    "fullScreen",
    "webkitIsFullScreen",
    "mozFullScreen",
    "msFullscreenElement",
    "fullscreenElement",
];

/// Exit methods on the document, in priority order.
pub const EXIT_METHODS: [HostMethod; 4] = [
    HostMethod::new(Vendor::Standard, "exitFullscreen"),
    HostMethod::new(Vendor::Mozilla, "mozCancelFullScreen"),
    HostMethod::new(Vendor::WebKit, "webkitCancelFullScreen"),
    HostMethod::new(Vendor::Microsoft, "msExitFullscreen"),
];

/// Request methods on the display surface, in priority order.
pub const REQUEST_METHODS: [HostMethod; 4] = [
    HostMethod::new(Vendor::Standard, "requestFullscreen"),
    HostMethod::new(Vendor::Mozilla, "mozRequestFullScreen"),
    HostMethod::new(Vendor::WebKit, "webkitRequestFullScreen"),
    HostMethod::new(Vendor::Microsoft, "msRequestFullscreen"),
];

/// First entry of `table` accepted by `present`.
pub fn first_present<T: Copy>(table: &[T], mut present: impl FnMut(&T) -> bool) -> Option<T> {
    table.iter().find(|&entry| present(entry)).copied()
}
