//! Database systems templates.

use super::{MustHave, Template, Variable};

pub static EASY: &[Template] = &[
  Template {
    pattern: "Explain {concept} in database systems.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "primary key",
        "foreign key",
        "candidate key",
        "super key",
        "composite key",
        "normalization",
        "denormalization",
        "schema",
        "instance",
        "entity",
        "attribute",
        "relationship",
        "cardinality",
        "ER diagram",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("primary key", &["unique", "not null", "identifier", "table", "one per table"]),
        ("foreign key", &["reference", "relationship", "parent", "child", "integrity"]),
        ("candidate key", &["unique", "minimal", "potential primary", "identifier"]),
        ("super key", &["uniquely identify", "superset", "attributes", "candidate key"]),
        ("composite key", &["multiple columns", "combined", "unique together", "primary key"]),
        ("normalization", &["redundancy", "anomaly", "decomposition", "dependency", "normal form"]),
        ("denormalization", &["performance", "redundancy", "read optimization", "join reduction"]),
        ("schema", &["structure", "definition", "tables", "relationships", "blueprint"]),
        ("instance", &["data", "snapshot", "current state", "values"]),
        ("entity", &["object", "real world", "table", "er model"]),
        ("attribute", &["property", "column", "characteristic", "field"]),
        ("relationship", &["association", "connection", "entities", "cardinality"]),
        ("cardinality", &["one to one", "one to many", "many to many", "relationship"]),
        ("ER diagram", &["entity relationship", "visual", "design", "boxes lines"]),
      ],
      fallback: &["database", "key", "relation"],
    },
    bonus: &["example", "use case", "advantage", "constraint"],
  },
  Template {
    pattern: "What are the different types of {element} in SQL?",
    variables: &[Variable {
      name: "element",
      options: &[
        "joins",
        "constraints",
        "indexes",
        "data types",
        "keys",
        "subqueries",
        "aggregate functions",
        "operators",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "element",
      table: &[
        ("joins", &["inner", "outer", "left", "right", "cross", "join"]),
        ("constraints", &["primary key", "foreign key", "unique", "not null", "check"]),
        ("indexes", &["clustered", "non-clustered", "unique", "composite", "b-tree"]),
        ("data types", &["integer", "varchar", "date", "boolean", "float"]),
        ("keys", &["primary", "foreign", "candidate", "super", "unique"]),
        ("subqueries", &["scalar", "row", "table", "correlated", "nested"]),
        ("aggregate functions", &["sum", "count", "avg", "max", "min"]),
        ("operators", &["arithmetic", "comparison", "logical", "set", "like"]),
      ],
      fallback: &["sql", "database", "types"],
    },
    bonus: &["syntax", "example", "when to use", "performance"],
  },
  Template {
    pattern: "What is the difference between {term1} and {term2} in databases?",
    variables: &[
      Variable {
        name: "term1",
        options: &["DDL", "WHERE", "DELETE", "clustered index", "CHAR", "HAVING", "UNION"],
      },
      Variable {
        name: "term2",
        options: &["DML", "HAVING", "TRUNCATE", "non-clustered index", "VARCHAR", "WHERE", "UNION ALL"],
      },
    ],
    must_have: MustHave::Fixed(&["difference", "sql", "database", "comparison"]),
    bonus: &["example", "when to use", "performance", "syntax"],
  },
  Template {
    pattern: "Explain the concept of {concept} in relational databases.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "referential integrity",
        "domain constraints",
        "entity integrity",
        "NULL values",
        "views",
        "stored procedures",
        "triggers",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("referential integrity", &["foreign key", "parent", "child", "valid reference"]),
        ("domain constraints", &["data type", "valid values", "check constraint", "range"]),
        ("entity integrity", &["primary key", "not null", "unique", "identifier"]),
        ("NULL values", &["unknown", "missing", "three-valued logic", "is null"]),
        ("views", &["virtual table", "query", "abstraction", "security"]),
        ("stored procedures", &["precompiled", "procedure", "parameters", "reusable"]),
        ("triggers", &["automatic", "event", "before after", "row level"]),
      ],
      fallback: &["database", "constraint", "concept"],
    },
    bonus: &["example", "importance", "implementation", "use case"],
  },
  Template {
    pattern: "Write a SQL query to {task}.",
    variables: &[Variable {
      name: "task",
      options: &[
        "find all records from a table",
        "join two tables",
        "filter records based on a condition",
        "group data and calculate aggregates",
        "sort results in descending order",
        "find duplicate records",
        "insert new records",
        "update existing records",
      ],
    }],
    must_have: MustHave::Fixed(&["select", "from", "sql", "query"]),
    bonus: &["optimization", "index usage", "alternative approaches", "best practices"],
  },
];

pub static MEDIUM: &[Template] = &[
  Template {
    pattern: "Explain {normalForm} and provide an example of converting to it.",
    variables: &[Variable {
      name: "normalForm",
      options: &[
        "First Normal Form (1NF)",
        "Second Normal Form (2NF)",
        "Third Normal Form (3NF)",
        "BCNF (Boyce-Codd Normal Form)",
        "Fourth Normal Form (4NF)",
        "Fifth Normal Form (5NF)",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "normalForm",
      table: &[
        ("First Normal Form (1NF)", &["atomic", "no repeating groups", "single value", "unique rows"]),
        ("Second Normal Form (2NF)", &["1nf", "full functional dependency", "partial dependency", "composite key"]),
        ("Third Normal Form (3NF)", &["2nf", "transitive dependency", "non-key attributes", "directly dependent"]),
        ("BCNF (Boyce-Codd Normal Form)", &["3nf", "determinant", "candidate key", "functional dependency"]),
        ("Fourth Normal Form (4NF)", &["bcnf", "multi-valued dependency", "independent", "no redundancy"]),
        ("Fifth Normal Form (5NF)", &["4nf", "join dependency", "lossless decomposition", "project join"]),
      ],
      fallback: &["normalization", "dependency", "decomposition"],
    },
    bonus: &["redundancy", "anomaly", "example", "decomposition", "lossless"],
  },
  Template {
    pattern: "How does {concept} ensure data integrity in transactions?",
    variables: &[Variable {
      name: "concept",
      options: &[
        "ACID properties",
        "transaction isolation levels",
        "locking mechanisms",
        "two-phase locking",
        "MVCC",
        "write-ahead logging",
        "checkpointing",
        "recovery mechanisms",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("ACID properties", &["atomicity", "consistency", "isolation", "durability"]),
        ("transaction isolation levels", &["read uncommitted", "read committed", "repeatable read", "serializable"]),
        ("locking mechanisms", &["shared lock", "exclusive lock", "deadlock", "lock granularity"]),
        ("two-phase locking", &["growing phase", "shrinking phase", "acquire", "release"]),
        ("MVCC", &["multiple versions", "snapshot", "no locking", "concurrent"]),
        ("write-ahead logging", &["wal", "log before write", "recovery", "redo undo"]),
        ("checkpointing", &["snapshot", "recovery point", "flush", "periodic"]),
        ("recovery mechanisms", &["undo", "redo", "log", "crash recovery"]),
      ],
      fallback: &["transaction", "integrity", "consistency"],
    },
    bonus: &["example", "implementation", "trade-off", "performance"],
  },
  Template {
    pattern: "Explain {topic} and its importance in database performance.",
    variables: &[Variable {
      name: "topic",
      options: &[
        "query optimization",
        "indexing strategies",
        "query execution plans",
        "database partitioning",
        "database sharding",
        "connection pooling",
        "caching strategies",
        "query profiling",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "topic",
      table: &[
        ("query optimization", &["optimizer", "cost", "execution plan", "statistics"]),
        ("indexing strategies", &["b-tree", "hash", "covering index", "composite"]),
        ("query execution plans", &["explain", "scan", "join", "cost estimation"]),
        ("database partitioning", &["horizontal", "vertical", "range", "list", "hash"]),
        ("database sharding", &["distributed", "shard key", "horizontal scaling", "routing"]),
        ("connection pooling", &["reuse connections", "overhead reduction", "pool size"]),
        ("caching strategies", &["query cache", "result cache", "invalidation", "hit ratio"]),
        ("query profiling", &["explain analyze", "execution time", "bottleneck", "optimization"]),
      ],
      fallback: &["performance", "optimization", "database"],
    },
    bonus: &["tools", "best practices", "examples", "trade-offs"],
  },
  Template {
    pattern: "What are the advantages and disadvantages of {database} databases?",
    variables: &[Variable {
      name: "database",
      options: &[
        "relational (SQL)",
        "NoSQL document",
        "NoSQL key-value",
        "NoSQL graph",
        "NoSQL column-family",
        "time-series",
        "in-memory",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "database",
      table: &[
        ("relational (SQL)", &["structured", "acid", "joins", "schema", "sql"]),
        ("NoSQL document", &["json", "flexible schema", "mongodb", "nested"]),
        ("NoSQL key-value", &["simple", "fast lookup", "redis", "cache"]),
        ("NoSQL graph", &["relationships", "traversal", "neo4j", "nodes edges"]),
        ("NoSQL column-family", &["wide column", "cassandra", "write optimized", "distributed"]),
        ("time-series", &["time-stamped", "metrics", "influxdb", "aggregation"]),
        ("in-memory", &["fast", "ram", "redis", "volatile"]),
      ],
      fallback: &["database", "advantages", "disadvantages"],
    },
    bonus: &["use cases", "examples", "scalability", "consistency"],
  },
  Template {
    pattern: "Explain {concept} in the context of database concurrency.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "dirty read",
        "non-repeatable read",
        "phantom read",
        "lost update",
        "write skew",
        "serialization anomalies",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("dirty read", &["uncommitted", "rollback", "read uncommitted", "inconsistent"]),
        ("non-repeatable read", &["same query", "different results", "concurrent update"]),
        ("phantom read", &["new rows", "range query", "insert", "serializable"]),
        ("lost update", &["concurrent write", "overwrite", "lock", "lost changes"]),
        ("write skew", &["read then write", "constraint violation", "concurrent transactions"]),
        ("serialization anomalies", &["non-serializable", "cycle", "dependency", "conflict"]),
      ],
      fallback: &["concurrency", "anomaly", "transaction"],
    },
    bonus: &["isolation level prevention", "example scenario", "solutions", "detection"],
  },
];

pub static HARD: &[Template] = &[
  Template {
    pattern: "Explain {topic} and its role in query optimization.",
    variables: &[Variable {
      name: "topic",
      options: &[
        "query execution plans",
        "B+ tree indexing",
        "hash indexing",
        "query cost estimation",
        "join algorithms",
        "bitmap indexes",
        "covering indexes",
        "index-only scans",
        "statistics and histograms",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "topic",
      table: &[
        ("query execution plans", &["optimizer", "cost", "scan", "join", "operations"]),
        ("B+ tree indexing", &["balanced", "leaf nodes", "range queries", "ordered", "logarithmic"]),
        ("hash indexing", &["hash function", "bucket", "equality", "o(1)", "collision"]),
        ("query cost estimation", &["statistics", "cardinality", "selectivity", "cost model"]),
        ("join algorithms", &["nested loop", "hash join", "merge join", "cost", "algorithm"]),
        ("bitmap indexes", &["bitmap", "low cardinality", "boolean operations", "warehouse"]),
        ("covering indexes", &["include all columns", "index-only", "no table access", "performance"]),
        ("index-only scans", &["no table lookup", "covering index", "visibility map", "performance"]),
        ("statistics and histograms", &["distribution", "cardinality estimation", "optimizer", "analyze"]),
      ],
      fallback: &["optimization", "query", "performance"],
    },
    bonus: &["example", "when to use", "complexity", "trade-off"],
  },
  Template {
    pattern: "How would you design a database for {application}?",
    variables: &[Variable {
      name: "application",
      options: &[
        "an e-commerce platform",
        "a social media application",
        "a banking system",
        "a hospital management system",
        "a hotel reservation system",
        "an airline booking system",
        "a library management system",
      ],
    }],
    must_have: MustHave::Fixed(&["tables", "relationships", "normalization", "keys", "constraints"]),
    bonus: &["er diagram", "indexing strategy", "scalability", "performance considerations"],
  },
  Template {
    pattern: "Explain {technique} in distributed databases.",
    variables: &[Variable {
      name: "technique",
      options: &[
        "CAP theorem",
        "PACELC theorem",
        "eventual consistency",
        "strong consistency",
        "distributed transactions",
        "two-phase commit",
        "three-phase commit",
        "Paxos consensus",
        "Raft consensus",
        "vector clocks",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "technique",
      table: &[
        ("CAP theorem", &["consistency", "availability", "partition tolerance", "trade-off"]),
        ("PACELC theorem", &["cap extension", "latency", "consistency", "else"]),
        ("eventual consistency", &["eventually", "replicas", "convergence", "availability"]),
        ("strong consistency", &["immediate", "linearizable", "single copy", "latency"]),
        ("distributed transactions", &["multiple nodes", "atomicity", "coordination", "commit"]),
        ("two-phase commit", &["prepare", "commit", "coordinator", "blocking"]),
        ("three-phase commit", &["pre-commit", "non-blocking", "timeout", "recovery"]),
        ("Paxos consensus", &["proposer", "acceptor", "majority", "leader election"]),
        ("Raft consensus", &["leader", "follower", "candidate", "log replication"]),
        ("vector clocks", &["causality", "timestamps", "concurrent", "ordering"]),
      ],
      fallback: &["distributed", "consistency", "database"],
    },
    bonus: &["implementation", "trade-offs", "use cases", "examples"],
  },
  Template {
    pattern: "Discuss the implementation of {feature} in modern database systems.",
    variables: &[Variable {
      name: "feature",
      options: &[
        "MVCC (Multi-Version Concurrency Control)",
        "write-ahead logging",
        "buffer management",
        "query parallelization",
        "columnar storage",
        "compression techniques",
        "materialized views",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "feature",
      table: &[
        ("MVCC (Multi-Version Concurrency Control)", &["versions", "snapshot", "no locks", "garbage collection"]),
        ("write-ahead logging", &["wal", "durability", "recovery", "sequential writes"]),
        ("buffer management", &["buffer pool", "page replacement", "dirty pages", "checkpoint"]),
        ("query parallelization", &["parallel execution", "partitioning", "coordination", "speedup"]),
        ("columnar storage", &["column-oriented", "compression", "analytics", "sequential read"]),
        ("compression techniques", &["dictionary", "run-length", "delta", "storage reduction"]),
        ("materialized views", &["precomputed", "refresh", "query acceleration", "maintenance"]),
      ],
      fallback: &["implementation", "database", "internal"],
    },
    bonus: &["database examples", "trade-offs", "performance impact", "configuration"],
  },
  Template {
    pattern: "How do you handle {scenario} in a production database?",
    variables: &[Variable {
      name: "scenario",
      options: &[
        "database migration with zero downtime",
        "scaling read-heavy workloads",
        "scaling write-heavy workloads",
        "disaster recovery",
        "database performance degradation",
        "data corruption recovery",
      ],
    }],
    must_have: MustHave::Fixed(&["strategy", "steps", "considerations", "best practices"]),
    bonus: &["tools", "monitoring", "automation", "testing"],
  },
];
