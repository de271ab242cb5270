use crate::TestContext;

pub mod mockito;

impl TestContext {
    pub fn email<'a>(&'a mut self) -> EmailFixtures<'a> {
        EmailFixtures { setup: self }
    }
}

pub struct EmailFixtures<'a> {
    pub setup: &'a mut TestContext,
}
