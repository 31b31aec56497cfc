pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod fetch_page;
        pub mod list_coordinator;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod events;
        pub mod list_state;
        pub mod model;
        pub mod page;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod fetch_page;
            pub mod manage_list;
        }
    }
}
