use crate::{
    LogoError, check_script,
    commands::{CmdError, ParamError},
    config::RunConfig,
    interface::Strings,
    render::{Primitive, Vertex},
    shell::{Shell, ShellEnd, UNDO_EXHAUSTED},
    state::{TurtleState, WHITE},
    window::{ChannelWindow, WindowCmd, WindowEvent},
};

enum TestInput<'c> {
    Stdin(&'c str),
    Event(WindowEvent),
}

#[derive(Debug, PartialEq)]
enum TestResult {
    Stdout(String),
    Stderr(String),
    Window(WindowCmd),
}

/// Run the shell on the given inputs and collect everything it produced.
///
/// Window events are sent right away, so they are seen before the
/// next line of input is read.
fn shell_test(inputs: &[TestInput<'_>]) -> (ShellEnd, Vec<TestResult>) {
    let (window, cmds, events) = ChannelWindow::construct();
    let lines: Vec<String> = inputs
        .iter()
        .filter_map(|inp| match inp {
            TestInput::Stdin(line) => Some(line.to_string()),
            TestInput::Event(evt) => {
                events.send(*evt).unwrap();
                None
            }
        })
        .collect();
    let (interf, outputs) = Strings::construct(lines);
    let end = RunConfig::new().window(window).interface(interf).exec();
    let mut results: Vec<_> = outputs
        .try_iter()
        .map(|out| match out {
            Ok(msg) => TestResult::Stdout(msg),
            Err(msg) => TestResult::Stderr(msg),
        })
        .collect();
    results.extend(cmds.try_iter().map(TestResult::Window));
    (end, results)
}

/// Commands of the last frame sent to a channel window.
fn last_frame(cmds: &[WindowCmd]) -> &[WindowCmd] {
    let start = cmds
        .iter()
        .rposition(|cmd| matches!(cmd, WindowCmd::Clear(_)))
        .expect("at least one frame");
    &cmds[start..]
}

type TestShell = Shell<ChannelWindow, Strings<std::vec::IntoIter<String>>>;

/// Run lines as a script, without the interactive part.
fn run_lines(lines: &[&str]) -> (TestShell, Vec<WindowCmd>) {
    let (window, cmds, _events) = ChannelWindow::construct();
    let (interf, _outputs) = Strings::construct(Vec::<String>::new());
    let mut shell = Shell::new(window, interf);
    assert_eq!(shell.exec_script(lines.iter().copied()), None);
    let cmds = cmds.try_iter().collect();
    (shell, cmds)
}

#[test]
fn example_session() {
    let (end, results) = shell_test(&[
        TestInput::Stdin("xyz 1 2"),
        TestInput::Stdin("fw 10"),
        TestInput::Stdin("/quit"),
    ]);
    assert_eq!(end, ShellEnd::Quit);
    let white_line = vec![
        Vertex {
            pos: (0.0, 0.0),
            color: WHITE,
        },
        Vertex {
            pos: (10.0, 0.0),
            color: WHITE,
        },
    ];
    assert_eq!(
        results,
        &[
            TestResult::Stderr("\"xyz 1 2\" not recognized".to_string()),
            // initial frame
            TestResult::Window(WindowCmd::Clear((0.0, 0.0, 0.0))),
            TestResult::Window(WindowCmd::Present),
            // after the unrecognized command
            TestResult::Window(WindowCmd::Clear((0.0, 0.0, 0.0))),
            TestResult::Window(WindowCmd::Present),
            // after fw 10
            TestResult::Window(WindowCmd::Clear((0.0, 0.0, 0.0))),
            TestResult::Window(WindowCmd::Strip(white_line)),
            TestResult::Window(WindowCmd::Present),
        ]
    );
}

#[test]
fn input_end_stops_shell() {
    let (end, _) = shell_test(&[TestInput::Stdin("pu")]);
    assert_eq!(end, ShellEnd::InputEnded);
}

#[test]
fn window_exit_stops_shell() {
    let (end, results) = shell_test(&[
        TestInput::Event(WindowEvent::WindowExited),
        TestInput::Stdin("fw 10"),
    ]);
    assert_eq!(end, ShellEnd::WindowExited);
    // only the initial frame was drawn
    assert_eq!(results.len(), 2);
}

#[test]
fn undo_exhaustion_is_reported() {
    let (_, results) = shell_test(&[
        TestInput::Stdin("fw 10"),
        TestInput::Stdin("un"),
        TestInput::Stdin("un"),
        TestInput::Stdin("un"),
    ]);
    let messages: Vec<_> = results
        .iter()
        .filter(|res| !matches!(res, TestResult::Window(_)))
        .collect();
    assert_eq!(
        messages,
        [
            &TestResult::Stdout(UNDO_EXHAUSTED.to_string()),
            &TestResult::Stdout(UNDO_EXHAUSTED.to_string()),
        ]
    );
}

#[test]
fn malformed_command_is_reported() {
    let (_, results) = shell_test(&[TestInput::Stdin("fw abc"), TestInput::Stdin("pc 1 2")]);
    let errors: Vec<_> = results
        .iter()
        .filter_map(|res| match res {
            TestResult::Stderr(msg) => Some(msg.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].starts_with("\"fw abc\" not understood: \"abc\" is not an integer"));
    assert_eq!(
        errors[1],
        "\"pc 1 2\" not understood: expected 3 parameters, got 2"
    );
}

#[test]
fn shell_commands() {
    let (end, results) = shell_test(&[
        TestInput::Stdin("mv 3 4"),
        TestInput::Stdin("/pos"),
        TestInput::Stdin("/nope"),
        TestInput::Stdin("/h"),
        TestInput::Stdin("/q"),
    ]);
    assert_eq!(end, ShellEnd::Quit);
    let messages: Vec<_> = results
        .iter()
        .filter(|res| !matches!(res, TestResult::Window(_)))
        .collect();
    assert_eq!(messages.len(), 3);
    assert_eq!(
        messages[0],
        &TestResult::Stdout(
            "turtle is at pos (3.0, 4.0), head 0, pen down, color (255, 255, 255)".to_string()
        )
    );
    assert_eq!(
        messages[1],
        &TestResult::Stderr("unknown command /nope".to_string())
    );
    assert!(matches!(messages[2], TestResult::Stdout(help) if help.contains("fw <dist>")));
}

#[test]
fn pen_gap_gives_two_strips() {
    let (shell, cmds) = run_lines(&["pd", "fw 10", "pu", "fw 10", "pd", "fw 10"]);
    let strips: Vec<_> = last_frame(&cmds)
        .iter()
        .filter_map(|cmd| match cmd {
            WindowCmd::Strip(vertices) => {
                Some(vertices.iter().map(|v| v.pos).collect::<Vec<_>>())
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        strips,
        vec![
            vec![(0.0, 0.0), (0.0, 0.0), (10.0, 0.0)],
            vec![(20.0, 0.0), (30.0, 0.0)],
        ]
    );
    assert_eq!(shell.turtle().history().len(), 7);
}

#[test]
fn pen_color_reaches_vertex() {
    let (shell, _) = run_lines(&["pc 255 0 0", "fw 5"]);
    let frame = shell.turtle().frame();
    let Some(Primitive::Strip(strip)) = frame.primitives.last() else {
        panic!("expected a strip, got {:?}", frame.primitives);
    };
    assert_eq!(
        strip.last(),
        Some(&Vertex {
            pos: (5.0, 0.0),
            color: (1.0, 0.0, 0.0)
        })
    );
}

#[test]
fn background_survives_undo_but_not_reset() {
    let (mut shell, _) = run_lines(&["fw 1", "bg 255 255 255", "un"]);
    assert_eq!(shell.turtle().background(), WHITE);
    assert_eq!(shell.turtle().history().len(), 1);
    assert_eq!(shell.exec_line("rs"), None);
    assert_eq!(shell.turtle().background(), (0.0, 0.0, 0.0));
}

#[test]
fn failed_command_keeps_state() {
    let (mut shell, _) = run_lines(&["fw 10", "tl 45"]);
    let before: Vec<TurtleState> = shell.turtle().history().to_vec();
    for line in ["fw abc", "xyz 1 2", "mv 1", "re 1 2 3", "bg 1 2 x"] {
        assert_eq!(shell.exec_line(line), None);
    }
    assert_eq!(shell.turtle().history(), before.as_slice());
    assert_eq!(shell.turtle().background(), (0.0, 0.0, 0.0));
}

#[test]
fn script_quit_skips_interactive_part() {
    let (window, cmds, _events) = ChannelWindow::construct();
    let (interf, outputs) = Strings::construct(vec!["fw 10".to_string()]);
    let end = RunConfig::new()
        .window(window)
        .interface(interf)
        .script(vec!["tl 90".to_string(), "/quit".to_string()])
        .exec();
    assert_eq!(end, ShellEnd::Quit);
    assert_eq!(outputs.try_iter().count(), 0);
    // one frame for "tl 90", nothing else
    let origin = Vertex {
        pos: (0.0, 0.0),
        color: WHITE,
    };
    assert_eq!(
        cmds.try_iter().collect::<Vec<_>>(),
        [
            WindowCmd::Clear((0.0, 0.0, 0.0)),
            WindowCmd::Strip(vec![origin, origin]),
            WindowCmd::Present,
        ]
    );
}

#[test]
fn check_valid_script() {
    let ttl = check_script("pc 255 0 0\n\nfw 10\n/pos\nre 5 5\n").unwrap();
    assert_eq!(ttl.history().len(), 4);
    assert!(ttl.current().is_rect());
}

#[test]
fn check_reports_line() {
    let err = check_script("fw 10\ntl 90\nfw ten\nfw 10").unwrap_err();
    let LogoError::Script { line, error } = &err else {
        panic!("expected script error, got {err:?}");
    };
    assert_eq!(*line, 3);
    assert!(matches!(
        error,
        CmdError::Malformed {
            cause: ParamError::NotInteger { .. },
            ..
        }
    ));
    assert!(err.to_string().ends_with("at line 3"));
}
