//! End-to-end selection tests

use table_selection::selection::{disclose_schemas, filter_relations, follow_fks, join, split, uniq};
use table_selection::{
    Catalog, CatalogLoader, Column, InvalidTablePolicy, Relation, SelectionConfig, SelectionError,
    Selector, Table, TableSet, TableValidationError,
};

fn table(schema: &str, name: &str) -> Table {
    Table::new(schema, name).with_column(Column::new("id", "int8").primary_key())
}

fn referencing(schema: &str, name: &str, targets: &[(&str, &str)]) -> Table {
    targets.iter().fold(table(schema, name), |t, (ts, tt)| {
        t.with_column(Column::new(format!("{}_id", tt), "int8").foreign_key())
            .with_relation(Relation::new(*ts, *tt).on([format!("{}_id", tt)], ["id"]))
    })
}

mod codec_tests {
    use super::*;

    #[test]
    fn test_split_and_join() {
        assert_eq!(split("public.users"), ("public", "users"));
        assert_eq!(split("users"), ("public", "users"));
        assert_eq!(join("a", "t"), "a.t");
    }

    #[test]
    fn test_uniq() {
        assert_eq!(uniq(["a", "b", "a", "c"]), vec!["a", "b", "c"]);
    }
}

mod discovery_tests {
    use super::*;

    #[test]
    fn test_disclose_wildcard() {
        let catalog = Catalog::new(vec![table("a", "t1"), table("a", "t2"), table("b", "t3")]);
        let mut names = disclose_schemas(&catalog, &["a.*"]).into_vec();
        names.sort();
        assert_eq!(names, vec!["a.t1", "a.t2"]);
    }

    #[test]
    fn test_disclose_dedup() {
        let catalog = Catalog::new(vec![table("a", "t1"), table("a", "t2")]);
        assert_eq!(
            disclose_schemas(&catalog, &["a.t1", "a.t1"]).into_vec(),
            vec!["a.t1"]
        );
    }

    #[test]
    fn test_closure_chain_cycle_and_dangling() {
        let catalog = Catalog::new(vec![
            referencing("public", "t1", &[("public", "t2"), ("public", "t4")]),
            referencing("public", "t2", &[("public", "t3")]),
            referencing("public", "t3", &[("public", "t1")]),
        ]);
        let seed: TableSet = ["public.t1"].into_iter().collect();
        let included = follow_fks(&catalog, seed);

        assert_eq!(
            included.into_vec(),
            vec!["public.t1", "public.t2", "public.t3"]
        );
    }

    #[test]
    fn test_filter_after_closure() {
        let catalog = Catalog::new(vec![
            referencing("public", "t1", &[("public", "t2"), ("public", "t3")]),
            table("public", "t2"),
        ]);
        let included: TableSet = ["public.t1", "public.t2"].into_iter().collect();
        let mut tables = catalog.into_tables();

        filter_relations(&mut tables, &included);

        assert_eq!(tables[0].relations.len(), 1);
        assert_eq!(tables[0].relations[0].target(), "public.t2");
        assert!(tables[1].relations.is_empty());
    }
}

mod selector_tests {
    use super::*;

    const CATALOG: &str = r#"
tables:
  - schema: shop
    name: orders
    columns:
      - { name: id, type: int8, is_pk: true }
      - { name: customer_id, type: int8, is_fk: true }
      - { name: warehouse_id, type: int8, is_fk: true }
    relations:
      - { source_columns: [customer_id], target_schema: shop, target_table: customers, target_columns: [id] }
      - { source_columns: [warehouse_id], target_schema: logistics, target_table: warehouses, target_columns: [id] }
  - schema: shop
    name: customers
    columns:
      - { name: id, type: int8, is_pk: true }
      - { name: referrer_id, type: int8, is_fk: true }
    relations:
      - { source_columns: [referrer_id], target_schema: shop, target_table: customers, target_columns: [id] }
  - schema: logistics
    name: warehouses
    columns:
      - { name: id, type: int8, is_pk: true }
  - schema: logistics
    name: bad-table
    columns:
      - { name: id, type: int8 }
"#;

    #[test]
    fn test_full_pipeline() {
        let catalog = CatalogLoader::from_yaml_str(CATALOG).unwrap();
        let selector = Selector::new(SelectionConfig::builder().pattern("shop.orders").build());
        let selection = selector.select(&catalog).unwrap();

        assert_eq!(
            selection.table_names(),
            vec!["shop.orders", "shop.customers", "logistics.warehouses"]
        );
        assert_eq!(selection.tables[0].relations.len(), 2);
        assert_eq!(selection.cycles, vec![vec!["shop.customers".to_string()]]);
    }

    #[test]
    fn test_without_fks_prunes_outside_relations() {
        let catalog = CatalogLoader::from_yaml_str(CATALOG).unwrap();
        let config = SelectionConfig::builder()
            .pattern("shop.*")
            .follow_fks(false)
            .build();
        let selection = Selector::new(config).select(&catalog).unwrap();

        assert_eq!(selection.table_names(), vec!["shop.orders", "shop.customers"]);
        assert_eq!(selection.tables[0].relations.len(), 1);
        assert_eq!(selection.tables[0].relations[0].target(), "shop.customers");
    }

    #[test]
    fn test_invalid_table_policies() {
        let catalog = CatalogLoader::from_yaml_str(CATALOG).unwrap();

        let abort = SelectionConfig::builder().pattern("logistics.*").build();
        match Selector::new(abort).select(&catalog) {
            Err(SelectionError::InvalidTable(err)) => {
                assert_eq!(err.table, "logistics.bad-table");
                assert_eq!(
                    err.source,
                    TableValidationError::IllegalTableName("bad-table".to_string())
                );
            }
            other => panic!("expected invalid table, got {:?}", other),
        }

        let skip = SelectionConfig::builder()
            .pattern("logistics.*")
            .invalid_tables(InvalidTablePolicy::Skip)
            .build();
        let selection = Selector::new(skip).select(&catalog).unwrap();
        assert_eq!(selection.table_names(), vec!["logistics.warehouses"]);
        assert_eq!(selection.skipped.len(), 1);
    }

    #[test]
    fn test_config_from_yaml_drives_selector() {
        let catalog = CatalogLoader::from_yaml_str(CATALOG).unwrap();
        let config =
            SelectionConfig::from_yaml_str("patterns: [shop.customers]\nfollowFks: true\n").unwrap();
        let selection = Selector::new(config).select(&catalog).unwrap();
        assert_eq!(selection.table_names(), vec!["shop.customers"]);
    }
}
