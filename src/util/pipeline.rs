//! Execute pipelines of named stages.

use log::trace;

/// A pipeline transforming a value through a sequence of named stages.
///
/// Each stage consumes the output of the previous one. The output of every
/// stage is logged at `trace` level.
///
/// # Example
///
/// ```
/// use stylefmt::util::pipeline::Pipeline;
///
/// let result = Pipeline::new(String::from(" a "))
///     .stage("trim", |s| s.trim().to_owned())
///     .stage("upper", |s| s.to_uppercase())
///     .into_inner();
///
/// assert_eq!(result, "A");
/// ```
#[derive(Debug)]
pub struct Pipeline<T>(T);

impl<T> Pipeline<T>
where
    T: std::fmt::Debug,
{
    /// Create a pipeline from an initial value.
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Apply a stage.
    pub fn stage(self, name: &str, f: impl FnOnce(T) -> T) -> Self {
        let value = (f)(self.0);
        trace!("{name}: {value:?}");
        Self(value)
    }

    /// Apply a stage if `enabled` is true, otherwise pass the value through.
    ///
    /// # Example
    ///
    /// ```
    /// use stylefmt::util::pipeline::Pipeline;
    ///
    /// let result = Pipeline::new(1)
    ///     .stage_if(false, "double", |x| 2 * x)
    ///     .stage_if(true, "increment", |x| x + 1)
    ///     .into_inner();
    ///
    /// assert_eq!(result, 2);
    /// ```
    pub fn stage_if(self, enabled: bool, name: &str, f: impl FnOnce(T) -> T) -> Self {
        if enabled {
            self.stage(name, f)
        } else {
            self
        }
    }

    /// Consume the pipeline and return the value.
    pub fn into_inner(self) -> T {
        self.0
    }
}
