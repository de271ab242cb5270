use wayfarer_test_utils::prelude::*;

use crate::server::data::PageRequest;

mod subscriber;

fn first_page(per_page: u64) -> PageRequest {
    PageRequest { index: 0, per_page }
}
