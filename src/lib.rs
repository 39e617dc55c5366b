pub mod shared {
    pub mod core {
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod json_response;
    }
}

pub mod modules {
    pub mod notes {
        pub mod core {
            pub mod note;
            pub mod note_id;
        }
        pub mod use_cases {
            pub mod create_note {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_note {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod note_store;
                pub mod note_store_in_memory;
            }
        }
    }
}

pub mod client;
pub mod shell;
