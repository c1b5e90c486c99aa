pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! Refresh cadence, backend endpoints and chart styling, organized by
    //! functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered diagnostic events between widgets and the UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // BACKEND CONNECTION
    // =============================================================================

    /// Backend used when neither flags, environment nor config file name one
    pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

    /// Environment variable overriding the backend base URL
    pub const API_URL_ENV: &str = "BLOODBANK_API_URL";

    /// Environment variable carrying a pre-issued backend session cookie
    pub const SESSION_COOKIE_ENV: &str = "BLOODBANK_SESSION_COOKIE";

    /// Connect timeout for backend requests (seconds). There is no overall
    /// request timeout: a hung request only delays its own tick.
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read-only JSON endpoints polled by the widgets
    pub mod endpoints {
        pub const BLOOD_STOCK: &str = "api/blood-stock";
        pub const STATS: &str = "api/stats";
        pub const RECENT_DONORS: &str = "api/recent-donors";
        pub const RECENT_REQUESTS: &str = "api/recent-requests";
    }

    // =============================================================================
    // REFRESH CADENCE
    // =============================================================================

    /// Poll intervals per widget
    pub mod refresh {
        use std::time::Duration;

        /// Blood stock chart refresh interval (milliseconds)
        pub const STOCK_INTERVAL_MS: u64 = 30_000;

        /// Live statistics refresh interval (milliseconds)
        pub const STATS_INTERVAL_MS: u64 = 10_000;

        /// Recent donors and recent requests refresh interval (milliseconds)
        pub const RECENT_INTERVAL_MS: u64 = 15_000;

        pub const fn stock_interval() -> Duration {
            Duration::from_millis(STOCK_INTERVAL_MS)
        }

        pub const fn stats_interval() -> Duration {
            Duration::from_millis(STATS_INTERVAL_MS)
        }

        pub const fn recent_interval() -> Duration {
            Duration::from_millis(RECENT_INTERVAL_MS)
        }
    }

    // =============================================================================
    // ALERT BANNERS
    // =============================================================================

    pub mod alerts {
        use std::time::Duration;

        /// Delay before banners present at startup are closed (milliseconds)
        pub const DISMISS_DELAY_MS: u64 = 5_000;

        pub const fn dismiss_delay() -> Duration {
            Duration::from_millis(DISMISS_DELAY_MS)
        }
    }

    // =============================================================================
    // CHART STYLING
    // =============================================================================

    pub mod chart {
        /// Fixed chart title
        pub const TITLE: &str = "Blood Inventory by Type";

        /// Dataset label shown next to bar values
        pub const DATASET_LABEL: &str = "Units Available";

        /// Bar palette, cycled by bar index
        pub const PALETTE: [(u8, u8, u8); 8] = [
            (220, 53, 69),
            (255, 99, 132),
            (255, 159, 64),
            (255, 205, 86),
            (75, 192, 192),
            (54, 162, 235),
            (153, 102, 255),
            (201, 203, 207),
        ];

        /// Opacity of the bar fill; borders are drawn fully opaque
        pub const FILL_ALPHA: f32 = 0.7;

        /// Bar border width
        pub const BORDER_WIDTH: u16 = 2;

        /// Y-axis tick step; units are whole numbers
        pub const TICK_STEP: u64 = 1;
    }
}
