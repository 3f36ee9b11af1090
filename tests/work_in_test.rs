// Changes the process working directory; keep it the only test in this binary.
use std::fs;

use bakehook::hooks::{find_hooks, run_hook};
use bakehook::utils::work_in;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_hooks_are_found_from_working_directory() {
    let template_dir = TempDir::new().unwrap();
    let project_dir = TempDir::new().unwrap();
    let hooks_dir = template_dir.path().join("hooks");
    fs::create_dir_all(&hooks_dir).unwrap();
    fs::write(
        hooks_dir.join("pre_gen_project.sh"),
        "cat > /dev/null\necho '{\"new_key\": \"v\"}'\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    let context = json!({"my_key": "my_val"}).as_object().cloned().unwrap();
    {
        let _guard = work_in(template_dir.path()).unwrap();
        assert_eq!(find_hooks().unwrap().len(), 1);

        let updated = run_hook("pre_gen_project", project_dir.path(), context.clone()).unwrap();
        assert_eq!(updated, json!({"new_key": "v"}).as_object().cloned().unwrap());

        let unchanged = run_hook("post_gen_project", project_dir.path(), context.clone()).unwrap();
        assert_eq!(unchanged, context);
    }
    assert_eq!(std::env::current_dir().unwrap(), previous);
}
