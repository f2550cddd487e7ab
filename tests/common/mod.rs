#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use lc3_grader::backend::{Assignment, Backend, Machine};
use lc3_grader::compare::HALT_BANNER;
use lc3_grader::err::{AsmError, LoadError, MachineFault};
use lc3_grader::io::{BufferedPrinter, Inputter, Printer};
use lc3_grader::suite::TestSuite;
use rand::RngCore;

/// Shared, ordered log of everything the mocks were asked to do.
#[derive(Clone, Default)]
pub struct Events(Rc<RefCell<Vec<String>>>);

impl Events {
    pub fn push(&self, event: impl Into<String>) {
        self.0.borrow_mut().push(event.into());
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn count(&self, event: &str) -> usize {
        self.0.borrow().iter().filter(|e| *e == event).count()
    }
}

/// A backend whose "images" are just the names of the files they came from.
#[derive(Clone, Default)]
pub struct MockBackend {
    pub events: Events,
    /// Files which fail to assemble.
    pub rejects: Vec<String>,
    /// An image which fails to load.
    pub load_failure: Option<String>,
}

impl MockBackend {
    pub fn new(events: &Events) -> Self {
        Self { events: events.clone(), ..Default::default() }
    }

    fn image(&self, verb: &str, path: &Path) -> Result<String, AsmError> {
        let name = path.display().to_string();
        self.events.push(format!("{verb} {name}"));

        match self.rejects.contains(&name) {
            true => Err(AsmError::rejected(path, "invalid opcode")),
            false => Ok(name),
        }
    }
}

impl Backend for MockBackend {
    type Image = String;
    type Machine = MockMachine;

    fn assemble(&self, path: &Path) -> Result<String, AsmError> {
        self.image("assemble", path)
    }

    fn convert_bin(&self, path: &Path) -> Result<String, AsmError> {
        self.image("convert", path)
    }

    fn create_machine(&self, printer: BufferedPrinter, inputter: Box<dyn Inputter>) -> MockMachine {
        self.events.push("create");
        MockMachine {
            events: self.events.clone(),
            printer,
            inputter,
            load_failure: self.load_failure.clone(),
            loaded: vec![],
            regs: [0; 8],
        }
    }
}

/// A machine which "runs" by echoing its input and then halting.
pub struct MockMachine {
    pub events: Events,
    pub printer: BufferedPrinter,
    pub inputter: Box<dyn Inputter>,
    pub load_failure: Option<String>,
    pub loaded: Vec<String>,
    pub regs: [u16; 8],
}

impl MockMachine {
    pub fn run(&mut self) -> Result<(), MachineFault> {
        while let Some(c) = self.inputter.get_char() {
            match c {
                b'\n' => self.printer.newline(),
                c => self.printer.print(&char::from(c).to_string()),
            }
        }
        self.printer.print(HALT_BANNER);
        Ok(())
    }
}

impl Machine for MockMachine {
    type Image = String;

    fn load_image(&mut self, image: &String) -> Result<(), LoadError> {
        self.events.push(format!("load {image}"));
        if self.load_failure.as_ref() == Some(image) {
            return Err(LoadError::new("unresolved external symbol"));
        }
        self.loaded.push(image.clone());
        Ok(())
    }

    fn randomize(&mut self, rng: &mut dyn RngCore) {
        self.events.push("randomize");
        for r in &mut self.regs {
            *r = rng.next_u32() as u16;
        }
    }

    fn printer(&self) -> &BufferedPrinter {
        &self.printer
    }

    fn set_inputter(&mut self, inputter: Box<dyn Inputter>) {
        self.inputter = inputter;
    }
}

/// An assignment that logs its hooks and builds its suite from a closure.
pub struct Hooks<F> {
    pub events: Events,
    suite: F,
}

impl<F: Fn() -> TestSuite<MockMachine>> Hooks<F> {
    pub fn new(events: &Events, suite: F) -> Self {
        Self { events: events.clone(), suite }
    }
}

impl<F: Fn() -> TestSuite<MockMachine>> Assignment<MockMachine> for Hooks<F> {
    fn setup(&self) -> TestSuite<MockMachine> {
        self.events.push("setup");
        (self.suite)()
    }

    fn bringup(&self, machine: &mut MockMachine) {
        self.events.push("bringup");
        machine.regs[6] = 0xF000;
    }

    fn teardown(&self, _machine: &mut MockMachine) {
        self.events.push("teardown");
    }
}

/// Output written by a grading run.
pub fn output(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("grader output should be UTF-8")
}
