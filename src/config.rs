//! Page-level behaviour constants.

// Preloader
pub const PRELOADER_MIN_DISPLAY_MS: u32 = 1_500;
pub const PRELOADER_FALLBACK_MS: u32 = 4_000;
pub const PRELOADER_REMOVE_GRACE_MS: u32 = 800;

// Scrolling
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Pointer effects
pub const TILT_MAX_DEG: f64 = 7.0;
pub const TILT_SCALE: f64 = 1.05;
pub const TILT_PERSPECTIVE_PX: u32 = 1_000;
pub const CURSOR_SMOOTHING: f64 = 0.15;
pub const PREVIEW_OFFSET_PX: f64 = 15.0;

// Timers
pub const CAROUSEL_INTERVAL_MS: u32 = 3_500;
pub const ICON_FADE_MS: u32 = 300;
pub const FORM_SUBMIT_DELAY_MS: u32 = 1_500;
pub const FORM_SUCCESS_VISIBLE_MS: u32 = 5_000;

// Form rules
pub const MIN_NAME_LEN: usize = 2;
pub const MIN_MESSAGE_LEN: usize = 10;

// Backend endpoints
pub const CREATIVES_ENDPOINT: &str = "/api/creatives";
pub const TRACK_VISIT_ENDPOINT: &str = "/api/track-visit";

// Selectors
pub const PRELOADER: &str = ".preloader";
pub const MENU_TOGGLE: &str = ".mobile-menu-toggle";
pub const NAV_LINKS: &str = ".nav-links";
pub const NAV_LINK: &str = ".nav-link";
pub const NAV: &str = ".nav";
pub const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
pub const REVEAL_SECTIONS: &str =
    ".work-section, .about-section, .contact-section, .experience-section";
pub const PORTFOLIO_CARD: &str = ".portfolio-card";
pub const CONTACT_ICON: &str = ".contact-icon";
pub const HOVER_PREVIEW: &str = ".hover-preview";
pub const CAROUSEL_IMAGE: &str = ".carousel-image";
pub const CURSOR_DOT: &str = ".cursor-dot";
pub const CURSOR_OUTLINE: &str = ".cursor-outline";
pub const CURSOR_INTERACTIVE: &str = "a, button, .portfolio-card, .timeline-tags .tag";
pub const CONTACT_FORM: &str = ".contact-form";
pub const FORM_FIELDS: &str = ".form-input, .form-textarea";
pub const SUBMIT_BUTTON: &str = ".cta-button";
pub const CREATIVE_LIST_ID: &str = "creative-list";

// Class names
pub const ACTIVE: &str = "active";
pub const FADE_OUT: &str = "fade-out";
pub const SCROLLED: &str = "scrolled";
pub const FADE_IN_SECTION: &str = "fade-in-section";
pub const IS_VISIBLE: &str = "is-visible";
pub const PREVIEW_BOX: &str = "preview-box";
pub const CURSOR_HOVERED: &str = "cursor-hovered";
pub const FORM_ERROR: &str = "form-error";
pub const FIELD_ERROR: &str = "error";
pub const FORM_SUCCESS: &str = "form-success";

// Messages
pub const SUBMIT_PENDING_LABEL: &str = "Sending...";
pub const FORM_SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";
pub const CREATIVES_LOADING: &str = "Loading...";
pub const CREATIVES_EMPTY: &str = "No creative works have been published yet.";
pub const CREATIVES_FAILED: &str = "Could not load creative works. Please try again later.";
