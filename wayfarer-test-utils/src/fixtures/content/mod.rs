use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn content<'a>(&'a self) -> ContentFixtures<'a> {
        ContentFixtures { setup: self }
    }
}

pub struct ContentFixtures<'a> {
    pub setup: &'a TestContext,
}
