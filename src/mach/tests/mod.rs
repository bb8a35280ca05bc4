use crate::mach::{Event, Memory, Runtime, Word};

mod arith_test;

fn runtime(words: &[Word]) -> Runtime {
    Runtime::with_memory(Memory::from_words(words.to_vec()).unwrap())
}

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped | Event::Input => {
                break;
            }
            Event::Fault(error) => {
                s.push_str(&format!("!{}\n", error));
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&String::from_utf8_lossy(ps));
            }
            Event::List(ls) => {
                s.push_str(&format!("{}\n", ls));
            }
        }
        prev_running = event == Event::Running;
    }
    s
}
