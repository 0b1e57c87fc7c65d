use sqlchain::{BuilderConfig, Dialect, QueryBuilder, Value};

struct UserFilter {
    id: i64,
    first_name: String,
    last_name: String,
    group_ids: Vec<i64>,
    permissions: Vec<String>,
    scores: Vec<f64>,
    active: bool,
}

fn sample_filter() -> UserFilter {
    UserFilter {
        id: 2,
        first_name: String::new(),
        last_name: "Boneto".to_string(),
        group_ids: vec![1, 2, 3],
        permissions: vec!["USER".to_string(), "ADMIN".to_string()],
        scores: Vec::new(),
        active: true,
    }
}

fn groups_subquery() -> (String, Vec<Value>) {
    sqlchain::postgres()
        .raw("SELECT json_agg(g.id) FROM tbl_group g")
        .and_raw("WHERE g.id_user = tb.id")
        .and("g.active = ?", 1)
        .build()
}

#[test]
fn select_with_subquery_postgres() {
    let input = sample_filter();
    let (sub_sql, sub_params) = groups_subquery();

    let (sql, params) = sqlchain::postgres()
        .raw(
            r"
            SELECT *.tb, (%s) AS groups FROM tbl tb
        ",
        )
        .sub_raw(sub_sql)
        .begin_where()
        .and("tb.id = ?", input.id)
        .and_in("tb.group_id IN ? ", input.group_ids.clone())
        .and_raw_if("tb.active = 1", input.active)
        .and("tb.first_name = ?", &input.first_name)
        .and_like("tb.last_name LIKE ?", &input.last_name)
        .offset(10)
        .limit(20)
        .order_by_expr("tb.id")
        .build();

    assert_eq!(
        sql,
        "SELECT *.tb, (SELECT json_agg(g.id) FROM tbl_group g WHERE g.id_user = tb.id AND g.active = ?) AS groups FROM tbl tb WHERE 1 = 1 AND tb.id = ? AND tb.group_id IN ? AND tb.active = 1 AND tb.last_name LIKE ? ORDER BY tb.id OFFSET ? LIMIT ?"
    );

    let args: Vec<Value> = sub_params.into_iter().chain(params).collect();
    assert_eq!(
        args,
        vec![
            Value::Int(1),
            Value::Int(2),
            Value::from(vec![1, 2, 3]),
            Value::from("%Boneto%"),
            Value::Int(10),
            Value::Int(20),
        ]
    );
}

#[test]
fn select_with_subquery_sql_server() {
    let input = sample_filter();
    let (sub_sql, sub_params) = sqlchain::postgres()
        .raw("SELECT g.id FROM tbl_group g")
        .and_raw("WHERE g.id_user = tb.id")
        .and("g.active = ?", 1)
        .build();

    let (sql, params) = sqlchain::sql_server()
        .raw("SELECT *.tb, (%s FOR JSON PATH) AS groups FROM tbl tb")
        .sub_raw(sub_sql)
        .begin_where()
        .and("tb.id = ?", input.id)
        .and_in("tb.group_id IN ? ", input.group_ids.clone())
        .and_in("tb.permission_id IN ? ", input.permissions.clone())
        .and_in("tb.values IN ? ", input.scores.clone())
        .and_raw_if("tb.active = 1", input.active)
        .and("tb.first_name = ?", &input.first_name)
        .and_like("tb.last_name LIKE ?", &input.last_name)
        .offset(10)
        .limit(20)
        .order_by("tb.id", "asc")
        .build();

    assert_eq!(
        sql,
        "SELECT *.tb, (SELECT g.id FROM tbl_group g WHERE g.id_user = tb.id AND g.active = ? FOR JSON PATH) AS groups FROM tbl tb WHERE 1 = 1 AND tb.id = ? AND tb.group_id IN ? AND tb.permission_id IN ? AND tb.active = 1 AND tb.last_name LIKE ? ORDER BY tb.id asc OFFSET ? ROWS FETCH NEXT ? ROWS ONLY"
    );

    let args: Vec<Value> = sub_params.into_iter().chain(params).collect();
    assert_eq!(
        args,
        vec![
            Value::Int(1),
            Value::Int(2),
            Value::from(vec![1, 2, 3]),
            Value::from(vec!["USER", "ADMIN"]),
            Value::from("%Boneto%"),
            Value::Int(10),
            Value::Int(20),
        ]
    );
}

#[test]
fn insert_for_both_dialects() {
    for dialect in [Dialect::Postgres, Dialect::SqlServer] {
        let (sql, params) = QueryBuilder::new(dialect)
            .raw(
                r"
                INSERT INTO tbl
            ",
            )
            .insert_value("first_name", "Vinicius")
            .insert_value("last_name", "")
            .insert_value_always("phone", "")
            .build();

        assert_eq!(sql, "INSERT INTO tbl (first_name, phone) VALUES (?, ?)");
        assert_eq!(params, vec![Value::from("Vinicius"), Value::from("")]);
    }
}

#[test]
fn update_for_both_dialects() {
    for dialect in [Dialect::Postgres, Dialect::SqlServer] {
        let (sql, params) = QueryBuilder::new(dialect)
            .raw("UPDATE tbl")
            .update_set("first_name = ?", "Vinicius")
            .update_set("last_name = ?", "")
            .update_set_always("phone = ?", "")
            .begin_where()
            .and("id = ?", 2)
            .build();

        assert_eq!(
            sql,
            "UPDATE tbl SET first_name = ?, phone = ? WHERE 1 = 1 AND id = ?"
        );
        assert_eq!(
            params,
            vec![Value::from("Vinicius"), Value::from(""), Value::Int(2)]
        );
    }
}

#[test]
fn gated_calls_do_not_change_output() {
    let base = || sqlchain::postgres().raw("SELECT * FROM t").begin_where();

    let (plain_sql, plain_params) = base().build();
    let (gated_sql, gated_params) = base()
        .and("a = ?", 0)
        .and("b = ?", "")
        .and("c = ?", false)
        .and("d = ?", None::<&str>)
        .and_like("e LIKE ?", "")
        .and_between("f BETWEEN ? AND ?", 1, 0)
        .and_in("g IN ?", Vec::<i32>::new())
        .build();

    assert_eq!(gated_sql, plain_sql);
    assert_eq!(gated_sql.len(), plain_sql.len());
    assert_eq!(gated_params, plain_params);
}

#[test]
fn configured_builder_renders_for_configured_dialect() {
    let config = BuilderConfig::new()
        .dialect("mssql".parse().unwrap())
        .enable_logging()
        .max_log_sql_length(16);

    let (sql, params) = QueryBuilder::from_config(&config)
        .raw("SELECT * FROM t")
        .order_by("id", "")
        .offset(0)
        .limit(5)
        .build();

    assert_eq!(sql, "SELECT * FROM t ORDER BY id OFFSET ? ROWS FETCH NEXT ? ROWS ONLY");
    assert_eq!(params, vec![Value::Int(0), Value::Int(5)]);
}
