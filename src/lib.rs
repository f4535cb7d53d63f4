// Crate entry point. Declares the module tree so the binary and tests can reach it.
//
// Layout
// - modules: one folder per bounded context, split into core, use_cases and adapters.
// - shell: composition root (config, router, shared state).

pub mod modules {
    pub mod email_signups {
        pub mod core {
            pub mod email_signup;
        }
        pub mod use_cases {
            pub mod sign_up {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod schema;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod signup_store;
                pub mod signup_store_in_memory;
            }
        }
    }
}

pub mod shell;
