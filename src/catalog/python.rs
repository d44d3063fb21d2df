//! Python language templates.

use super::{MustHave, Template, Variable};

pub static EASY: &[Template] = &[
  Template {
    pattern: "Explain {concept} in Python with an example.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "list comprehension",
        "dictionary comprehension",
        "lambda functions",
        "tuple unpacking",
        "string formatting",
        "slicing",
        "enumerate function",
        "zip function",
        "map function",
        "filter function",
        "range function",
        "len function",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("list comprehension", &["square brackets", "for loop", "expression", "concise", "list"]),
        ("dictionary comprehension", &["curly braces", "key value", "for loop", "expression"]),
        ("lambda functions", &["anonymous", "single expression", "lambda keyword", "inline"]),
        ("tuple unpacking", &["multiple assignment", "unpack", "tuple", "sequence"]),
        ("string formatting", &["f-string", "format", "placeholder", "concatenation"]),
        ("slicing", &["start stop step", "substring", "negative index", "copy"]),
        ("enumerate function", &["index value", "loop", "counter", "iterable"]),
        ("zip function", &["combine", "parallel iteration", "tuples", "multiple iterables"]),
        ("map function", &["apply function", "iterable", "transform", "lazy"]),
        ("filter function", &["filter elements", "predicate", "iterable", "condition"]),
        ("range function", &["sequence", "numbers", "start stop step", "iteration"]),
        ("len function", &["length", "count", "size", "elements"]),
      ],
      fallback: &["python", "syntax", "feature"],
    },
    bonus: &["code example", "use case", "advantage", "alternative"],
  },
  Template {
    pattern: "What is the difference between {type1} and {type2} in Python?",
    variables: &[
      Variable {
        name: "type1",
        options: &["list", "tuple", "set", "is", "=", "append", "deepcopy", "global", "args"],
      },
      Variable {
        name: "type2",
        options: &["tuple", "list", "dictionary", "==", "==", "extend", "copy", "nonlocal", "kwargs"],
      },
    ],
    must_have: MustHave::ByPair {
      vars: ("type1", "type2"),
      table: &[
        (("list", "tuple"), &["mutable", "immutable", "brackets", "parentheses", "modify"]),
        (("tuple", "list"), &["immutable", "mutable", "hashable", "performance"]),
        (("set", "dictionary"), &["unique values", "key-value", "unordered", "curly braces"]),
        (("is", "=="), &["identity", "equality", "same object", "same value", "memory"]),
        (("=", "=="), &["assignment", "comparison", "variable", "boolean"]),
        (("append", "extend"), &["single element", "iterable", "add", "extend list"]),
        (("deepcopy", "copy"), &["nested objects", "shallow", "independent", "reference"]),
        (("global", "nonlocal"), &["module level", "enclosing function", "scope", "modify"]),
        (("args", "kwargs"), &["positional", "keyword", "tuple", "dictionary"]),
      ],
      fallback: &["python", "data type", "difference"],
    },
    bonus: &["when to use", "performance", "memory", "example"],
  },
  Template {
    pattern: "What are {concept} in Python and how are they used?",
    variables: &[Variable {
      name: "concept",
      options: &[
        "modules",
        "packages",
        "built-in functions",
        "data types",
        "control structures",
        "loops",
        "conditional statements",
        "functions",
        "classes",
      ],
    }],
    must_have: MustHave::Fixed(&["python", "definition", "usage", "example"]),
    bonus: &["best practices", "common patterns", "import", "syntax"],
  },
  Template {
    pattern: "Explain Python's {feature} with examples.",
    variables: &[Variable {
      name: "feature",
      options: &[
        "indentation rules",
        "dynamic typing",
        "duck typing",
        "pass by object reference",
        "truthy and falsy values",
        "None keyword",
        "type hints",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "feature",
      table: &[
        ("indentation rules", &["whitespace", "block", "4 spaces", "syntax"]),
        ("dynamic typing", &["runtime", "no declaration", "type changes", "flexible"]),
        ("duck typing", &["behavior", "not type", "if it walks", "interface"]),
        ("pass by object reference", &["object reference", "mutable immutable", "assignment", "modify"]),
        ("truthy and falsy values", &["bool", "false values", "empty", "zero none"]),
        ("None keyword", &["null", "no value", "singleton", "is None"]),
        ("type hints", &["annotation", "typing module", "documentation", "mypy"]),
      ],
      fallback: &["python", "feature", "language"],
    },
    bonus: &["examples", "gotchas", "best practices", "related features"],
  },
];

pub static MEDIUM: &[Template] = &[
  Template {
    pattern: "Explain how {concept} works in Python.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "decorators",
        "generators",
        "context managers",
        "iterators",
        "*args and **kwargs",
        "closures",
        "property decorators",
        "class methods vs static methods",
        "dunder methods",
        "metaclasses basics",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("decorators", &["@symbol", "wrapper", "function", "modify behavior", "higher order"]),
        ("generators", &["yield", "lazy evaluation", "iterator", "memory efficient", "next"]),
        ("context managers", &["with statement", "__enter__", "__exit__", "resource management"]),
        ("iterators", &["__iter__", "__next__", "iteration protocol", "for loop"]),
        ("*args and **kwargs", &["variable arguments", "positional", "keyword", "unpacking"]),
        ("closures", &["enclosed", "free variables", "function factory", "state"]),
        ("property decorators", &["@property", "getter setter", "encapsulation", "attribute"]),
        ("class methods vs static methods", &["@classmethod", "@staticmethod", "cls", "self"]),
        ("dunder methods", &["double underscore", "magic methods", "__init__", "__str__"]),
        ("metaclasses basics", &["type", "class of class", "customize", "__new__"]),
      ],
      fallback: &["python", "advanced", "feature"],
    },
    bonus: &["code example", "use case", "implementation", "advantage"],
  },
  Template {
    pattern: "How does Python handle {concept} and what are the best practices?",
    variables: &[Variable {
      name: "concept",
      options: &[
        "exception handling",
        "memory management",
        "garbage collection",
        "multithreading",
        "file handling",
        "logging",
        "testing",
        "virtual environments",
        "dependency management",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("exception handling", &["try", "except", "finally", "raise", "exception"]),
        ("memory management", &["reference counting", "garbage collector", "heap", "allocation"]),
        ("garbage collection", &["reference counting", "cycle detection", "gc module", "automatic"]),
        ("multithreading", &["threading", "gil", "concurrent", "thread", "lock"]),
        ("file handling", &["open", "close", "read", "write", "with statement"]),
        ("logging", &["logger", "handlers", "levels", "formatters", "configuration"]),
        ("testing", &["unittest", "pytest", "assert", "mock", "fixtures"]),
        ("virtual environments", &["venv", "isolation", "dependencies", "activate"]),
        ("dependency management", &["pip", "requirements.txt", "poetry", "versions"]),
      ],
      fallback: &["python", "management", "best practice"],
    },
    bonus: &["example", "common mistakes", "performance", "alternative"],
  },
  Template {
    pattern: "Explain the {module} module in Python.",
    variables: &[Variable {
      name: "module",
      options: &[
        "collections",
        "itertools",
        "functools",
        "os",
        "sys",
        "json",
        "re (regular expressions)",
        "datetime",
        "typing",
        "dataclasses",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "module",
      table: &[
        ("collections", &["namedtuple", "deque", "counter", "defaultdict", "ordereddict"]),
        ("itertools", &["chain", "combinations", "permutations", "product", "cycle"]),
        ("functools", &["partial", "reduce", "lru_cache", "wraps", "total_ordering"]),
        ("os", &["path", "file operations", "environment", "directory", "system"]),
        ("sys", &["arguments", "path", "exit", "stdin stdout", "version"]),
        ("json", &["dumps", "loads", "encode", "decode", "serialization"]),
        ("re (regular expressions)", &["match", "search", "findall", "pattern", "compile"]),
        ("datetime", &["date", "time", "timedelta", "strftime", "parsing"]),
        ("typing", &["type hints", "List", "Dict", "Optional", "Union"]),
        ("dataclasses", &["@dataclass", "automatic methods", "fields", "frozen"]),
      ],
      fallback: &["python", "module", "standard library"],
    },
    bonus: &["common functions", "examples", "best practices", "alternatives"],
  },
  Template {
    pattern: "How do you implement {pattern} in Python?",
    variables: &[Variable {
      name: "pattern",
      options: &[
        "singleton pattern",
        "factory pattern",
        "observer pattern",
        "decorator pattern",
        "strategy pattern",
        "mixin classes",
      ],
    }],
    must_have: MustHave::Fixed(&["implementation", "python", "pattern", "code"]),
    bonus: &["pythonic way", "alternatives", "use cases", "libraries that use it"],
  },
];

pub static HARD: &[Template] = &[
  Template {
    pattern: "Explain {concept} and its implications for Python development.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "Global Interpreter Lock (GIL)",
        "metaclasses",
        "descriptors",
        "async/await",
        "memory profiling",
        "C extensions",
        "Python bytecode",
        "import system internals",
        "garbage collection internals",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("Global Interpreter Lock (GIL)", &["single thread", "interpreter lock", "bytecode", "multiprocessing", "cpython"]),
        ("metaclasses", &["class of class", "__new__", "__init__", "type", "customize class creation"]),
        ("descriptors", &["__get__", "__set__", "__delete__", "attribute access", "protocol"]),
        ("async/await", &["coroutine", "event loop", "asyncio", "non-blocking", "concurrent"]),
        ("memory profiling", &["memory_profiler", "tracemalloc", "leak detection", "optimization"]),
        ("C extensions", &["c api", "cpython", "performance", "extension modules"]),
        ("Python bytecode", &["compile", "dis module", "pyc", "vm instructions"]),
        ("import system internals", &["importlib", "finders", "loaders", "sys.path"]),
        ("garbage collection internals", &["generational", "reference counting", "cycle detection", "gc module"]),
      ],
      fallback: &["python", "advanced", "internals"],
    },
    bonus: &["practical example", "workaround", "when to use", "performance impact"],
  },
  Template {
    pattern: "How do you optimize {aspect} in Python applications?",
    variables: &[Variable {
      name: "aspect",
      options: &[
        "CPU-bound tasks",
        "I/O-bound tasks",
        "memory usage",
        "startup time",
        "algorithm performance",
        "database queries",
        "API response time",
      ],
    }],
    must_have: MustHave::Fixed(&["optimization", "performance", "python", "techniques"]),
    bonus: &["profiling tools", "benchmarking", "examples", "trade-offs"],
  },
  Template {
    pattern: "Explain {feature} and when you would use it.",
    variables: &[Variable {
      name: "feature",
      options: &[
        "__slots__",
        "weakref",
        "abstract base classes",
        "protocols (structural subtyping)",
        "context variables",
        "dataclass with advanced features",
        "singledispatch",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "feature",
      table: &[
        ("__slots__", &["memory", "fixed attributes", "no __dict__", "performance"]),
        ("weakref", &["weak reference", "garbage collection", "circular reference", "caching"]),
        ("abstract base classes", &["abc", "abstractmethod", "contract", "inheritance"]),
        ("protocols (structural subtyping)", &["Protocol", "duck typing", "static", "mypy"]),
        ("context variables", &["contextvars", "async", "thread-local", "copy_context"]),
        ("dataclass with advanced features", &["field", "post_init", "frozen", "slots"]),
        ("singledispatch", &["overloading", "type dispatch", "functools", "extensible"]),
      ],
      fallback: &["python", "advanced feature", "usage"],
    },
    bonus: &["code example", "alternatives", "caveats", "real-world usage"],
  },
  Template {
    pattern: "Discuss {topic} in Python's concurrency model.",
    variables: &[Variable {
      name: "topic",
      options: &[
        "asyncio event loop internals",
        "multiprocessing vs threading",
        "concurrent.futures",
        "async generators",
        "task groups",
        "synchronization primitives",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "topic",
      table: &[
        ("asyncio event loop internals", &["event loop", "tasks", "futures", "run_until_complete"]),
        ("multiprocessing vs threading", &["process", "thread", "gil", "cpu io bound"]),
        ("concurrent.futures", &["executor", "threadpool", "processpool", "submit"]),
        ("async generators", &["async for", "yield", "async iteration", "streaming"]),
        ("task groups", &["asyncio", "structured concurrency", "exception handling", "cancel"]),
        ("synchronization primitives", &["lock", "semaphore", "event", "condition"]),
      ],
      fallback: &["concurrency", "python", "async"],
    },
    bonus: &["code examples", "performance considerations", "common pitfalls", "best practices"],
  },
];
