use bakehook::cli::{Args, Commands};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("bakehook")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_serialize_args() {
    let parsed =
        Args::try_parse_from(make_args(&["serialize", "context.json", "--type", "yaml"])).unwrap();

    assert!(!parsed.verbose);
    match parsed.command {
        Commands::Serialize { input, serializer_type, template } => {
            assert_eq!(input, Some(PathBuf::from("context.json")));
            assert_eq!(serializer_type.as_deref(), Some("yaml"));
            assert_eq!(template, None);
        }
        other => panic!("Expected serialize command, got {:?}", other),
    }
}

#[test]
fn test_deserialize_reads_stdin_by_default() {
    let parsed = Args::try_parse_from(make_args(&["-v", "deserialize"])).unwrap();

    assert!(parsed.verbose);
    match parsed.command {
        Commands::Deserialize { input, .. } => assert_eq!(input, None),
        other => panic!("Expected deserialize command, got {:?}", other),
    }
}

#[test]
fn test_run_hook_args() {
    let parsed = Args::try_parse_from(make_args(&[
        "run-hook",
        "pre_gen_project",
        "./template",
        "./output",
        "--context",
        "ctx.json",
        "--in-place",
        "--skip-hooks-check",
        "--verbose",
    ]))
    .unwrap();

    assert!(parsed.verbose);
    match parsed.command {
        Commands::RunHook {
            hook,
            template_dir,
            project_dir,
            context,
            in_place,
            skip_hooks_check,
        } => {
            assert_eq!(hook, "pre_gen_project");
            assert_eq!(template_dir, PathBuf::from("./template"));
            assert_eq!(project_dir, PathBuf::from("./output"));
            assert_eq!(context, Some(PathBuf::from("ctx.json")));
            assert!(in_place);
            assert!(skip_hooks_check);
        }
        other => panic!("Expected run-hook command, got {:?}", other),
    }
}

#[test]
fn test_generate_args() {
    let parsed = Args::try_parse_from(make_args(&["generate", "./template", "./output"])).unwrap();
    match parsed.command {
        Commands::Generate { template_dir, project_dir, context, skip_hooks_check } => {
            assert_eq!(template_dir, PathBuf::from("./template"));
            assert_eq!(project_dir, PathBuf::from("./output"));
            assert_eq!(context, None);
            assert!(!skip_hooks_check);
        }
        other => panic!("Expected generate command, got {:?}", other),
    }
}

#[test]
fn test_missing_args() {
    let args = make_args(&["run-hook", "pre_gen_project", "./template"]);
    assert!(Args::try_parse_from(args).is_err());
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["hooks", "./template", "extra"])).is_err());
}
