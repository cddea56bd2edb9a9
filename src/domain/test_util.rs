use anyhow::anyhow;

/// Simulated reachability of a fake driven port. Fakes check this before doing any work so tests
/// can exercise the "store is down" paths.
#[derive(Default)]
pub enum Connectivity {
    #[default]
    Connected,
    Disconnected,
}

impl Connectivity {
    /// Produces an error when the fake is marked as disconnected
    pub fn fail_if_disconnected(&self) -> Result<(), anyhow::Error> {
        match self {
            Self::Connected => Ok(()),
            Self::Disconnected => Err(anyhow!("the todo store is unreachable")),
        }
    }
}

/// Records the arguments of each call to a faked async trait method and hands back a canned
/// return value. Wrap the owning fake in a [Mutex][std::sync::Mutex] so the trait methods,
/// which only get `&self`, can record calls.
///
/// ```ignore
/// struct FakeClock {
///     now_result: FakeImplementation<(), DateTime<Utc>>,
/// }
///
/// impl Clock for Mutex<FakeClock> {
///     async fn now(&self) -> DateTime<Utc> {
///         let mut locked = self.lock().expect("fake clock mutex poisoned");
///         locked.now_result.save_arguments(());
///         locked.now_result.return_value()
///     }
/// }
/// ```
pub struct FakeImplementation<Args, Ret> {
    saved_arguments: Vec<Args>,
    return_value: Option<Ret>,
}

impl<Args, Ret> FakeImplementation<Args, Ret> {
    pub fn new() -> FakeImplementation<Args, Ret> {
        FakeImplementation {
            saved_arguments: Vec::new(),
            return_value: None,
        }
    }

    /// Records the arguments of one invocation
    pub fn save_arguments(&mut self, arguments: Args) {
        self.saved_arguments.push(arguments)
    }

    /// Every set of arguments recorded so far, oldest first
    pub fn calls(&self) -> &[Args] {
        self.saved_arguments.as_slice()
    }
}

#[allow(dead_code)]
impl<Args, Ret: Clone> FakeImplementation<Args, Ret> {
    pub fn set_return_value(&mut self, return_value: Ret) {
        self.return_value = Some(return_value)
    }

    pub fn return_value(&self) -> Ret {
        self.return_value
            .clone()
            .unwrap_or_else(|| panic!("fake was invoked before a return value was configured"))
    }
}

impl<Args, Success: Clone> FakeImplementation<Args, anyhow::Result<Success>> {
    /// [anyhow::Error] can't be cloned, so the error is stored by its message and rebuilt on
    /// every call.
    pub fn set_returned_anyhow(&mut self, return_value: anyhow::Result<Success>) {
        self.return_value = Some(return_value.map_err(|err| anyhow!(format!("{err}"))));
    }

    pub fn return_value_anyhow(&self) -> anyhow::Result<Success> {
        match self.return_value {
            None => panic!("fake was invoked before a return value was configured"),
            Some(Ok(ref value)) => Ok(value.clone()),
            Some(Err(ref err)) => Err(anyhow!(format!("{err}"))),
        }
    }
}
