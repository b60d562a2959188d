/// Runs a block against a value and hands the value back.
pub trait Apply: Sized {
    fn apply(mut self, block: impl FnOnce(&mut Self)) -> Self {
        block(&mut self);
        self
    }

    fn try_apply<E>(mut self, block: impl FnOnce(&mut Self) -> Result<(), E>) -> Result<Self, E> {
        block(&mut self)?;
        Ok(self)
    }
}

impl<T> Apply for T {}

pub fn construct_with<T>(factory: impl FnOnce() -> T, block: impl FnOnce(&mut T)) -> T {
    factory().apply(block)
}

pub fn try_construct_with<T, E>(
    factory: impl FnOnce() -> T,
    block: impl FnOnce(&mut T) -> Result<(), E>,
) -> Result<T, E> {
    factory().try_apply(block)
}

/// A record that is filled in through a mutable view of itself.
///
/// `Scope` is what a construction block receives. For entities this is the
/// `Destruct*` form generated by `destructure`, so fields are plain public
/// places while the block runs and private again afterwards.
pub trait Scoped: Default {
    type Scope;

    fn scope(self, block: impl FnOnce(&mut Self::Scope)) -> Self;

    /// The value is only returned if `block` succeeds.
    fn try_scope<E>(
        self,
        block: impl FnOnce(&mut Self::Scope) -> Result<(), E>,
    ) -> Result<Self, E> {
        let mut outcome = Ok(());
        let scoped = self.scope(|scope| outcome = block(scope));
        outcome.map(|_| scoped)
    }
}

pub fn construct<T: Scoped>(block: impl FnOnce(&mut T::Scope)) -> T {
    T::default().scope(block)
}

pub fn try_construct<T: Scoped, E>(
    block: impl FnOnce(&mut T::Scope) -> Result<(), E>,
) -> Result<T, E> {
    T::default().try_scope(block)
}
