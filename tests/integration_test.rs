//! Integration tests for azure-mgmt-group-tf
//!
//! These tests drive the whole pipeline from a saved descendants response.

use azure_mgmt_group_tf::{
    azure::{load_descendants, parse_descendants, read_descendants_file},
    config::Config,
    get_node_table, write_terraform,
};

fn test_config(file: &str) -> Config {
    Config {
        subscription_id: "sub-1".to_string(),
        tenant_id: "tenant123".to_string(),
        access_token: "tok".to_string(),
        mgmt_groups_file: Some(file.to_string()),
    }
}

fn render_file(file: &str) -> String {
    let config = test_config(file);
    let body = read_descendants_file(file).expect("Failed to read descendants file");
    let table = get_node_table(parse_descendants(&body), &config);
    let mut out = Vec::new();
    write_terraform(&table, &mut out).expect("Failed to write terraform");
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn test_group_with_one_subscription() {
    let text = render_file("src/tests/test_data/descendants_test_02.json");

    let expected_group = "resource \"prismacloud_account_group\" \"Finance_Team---finance\" {\n\
                          \tname = \"Finance_Team---finance\"\n\
                          \tdescription = \"Made by Terraform\"\n\
                          \taccount_ids = [\"5f2b1e0c-0000-4000-8000-000000000001\"]\n\
                          \tchild_group_ids = []\n\
                          }\n";
    assert_eq!(
        text.matches(expected_group).count(),
        1,
        "exactly one block for the group:\n{text}"
    );
    // The subscription never gets its own block; the tenant root does.
    assert_eq!(text.matches("resource ").count(), 2);
    assert!(text.ends_with(
        "\tchild_group_ids = [\"Finance_Team---finance\"]\n}\n"
    ));
}

#[test]
fn test_full_tree() {
    let text = render_file("src/tests/test_data/descendants_test_01.json");

    let expected = "\
resource \"prismacloud_account_group\" \"Platform_Team---platform\" {
\tname = \"Platform_Team---platform\"
\tdescription = \"Made by Terraform\"
\taccount_ids = [\"5f2b1e0c-0000-4000-8000-000000000002\"]
\tchild_group_ids = [\"Finance_Team---finance\"]
}
resource \"prismacloud_account_group\" \"Finance_Team---finance\" {
\tname = \"Finance_Team---finance\"
\tdescription = \"Made by Terraform\"
\taccount_ids = [\"5f2b1e0c-0000-4000-8000-000000000001\"]
\tchild_group_ids = []
}
resource \"prismacloud_account_group\" \"Sandbox---sandbox\" {
\tname = \"Sandbox---sandbox\"
\tdescription = \"Made by Terraform\"
\taccount_ids = []
\tchild_group_ids = []
}
resource \"prismacloud_account_group\" \"TENANT_ROOT---tenant123\" {
\tname = \"TENANT_ROOT---tenant123\"
\tdescription = \"Made by Terraform\"
\taccount_ids = []
\tchild_group_ids = [\"Platform_Team---platform\" , \"Sandbox---sandbox\"]
}
";
    assert_eq!(text, expected);
}

#[test]
fn test_unparseable_body_renders_root_only() {
    let config = test_config("unused.json");
    let table = get_node_table(parse_descendants("<html>gateway timeout</html>"), &config);
    assert_eq!(table.len(), 1);

    let mut out = Vec::new();
    let count = write_terraform(&table, &mut out).expect("Failed to write terraform");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_load_from_configured_file() {
    let config = test_config("src/tests/test_data/descendants_test_01.json");
    let descendants = load_descendants(&config)
        .await
        .expect("Failed to load descendants");
    let table = get_node_table(descendants, &config);
    assert_eq!(table.len(), 6);
    assert_eq!(table.count_by_kind(), (4, 2, 0));
}
