use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn dex<'a>(&'a mut self) -> DexFixtures<'a> {
        DexFixtures { context: self }
    }
}

pub struct DexFixtures<'a> {
    pub context: &'a mut TestContext,
}
