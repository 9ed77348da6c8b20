pub mod compile_time {
    pub mod template {
        /// Maximum command template size in bytes (64KB)
        /// SECURITY: Bounds the scanner and substitution work per request
        pub const MAX_TEMPLATE_LENGTH: usize = 64 * 1024;

        /// Maximum number of placeholders in one template
        /// RESOURCE: Bounds the parameter list and generated value vectors
        pub const MAX_PLACEHOLDERS: usize = 1024;
    }

    pub mod generation {
        /// Longest string a `@{string[min,max]}` placeholder may request
        /// RESOURCE: A bound above this is rejected at parse time
        pub const MAX_GENERATED_STRING_LENGTH: u64 = 4096;
    }

    pub mod logging {
        /// Events retained by the in-memory logger before the oldest are dropped
        pub const LOG_BUFFER_SIZE: usize = 1000;

        /// Longest message text carried by a single log event
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 2048;
    }
}
