//! Object-oriented programming templates.

use super::{MustHave, Template, Variable};

pub static EASY: &[Template] = &[
  Template {
    pattern: "Explain {concept} in Object-Oriented Programming with an example.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "encapsulation",
        "inheritance",
        "polymorphism",
        "abstraction",
        "classes and objects",
        "constructors",
        "destructors",
        "access modifiers",
        "static members",
        "instance members",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("encapsulation", &["data hiding", "private", "public", "getter", "setter", "access"]),
        ("inheritance", &["extends", "parent", "child", "reuse", "is-a relationship"]),
        ("polymorphism", &["many forms", "overloading", "overriding", "compile time", "runtime"]),
        ("abstraction", &["hide complexity", "interface", "abstract class", "essential features"]),
        ("classes and objects", &["class", "object", "instance", "blueprint", "constructor"]),
        ("constructors", &["initialize", "new", "same name as class", "object creation"]),
        ("destructors", &["cleanup", "release resources", "garbage collection", "finalize"]),
        ("access modifiers", &["public", "private", "protected", "package", "visibility"]),
        ("static members", &["class level", "shared", "no object needed", "memory"]),
        ("instance members", &["object level", "unique per object", "this", "non-static"]),
      ],
      fallback: &["oop", "concept", "principle"],
    },
    bonus: &["code example", "real-world analogy", "advantage", "use case"],
  },
  Template {
    pattern: "What is the difference between {concept1} and {concept2}?",
    variables: &[
      Variable {
        name: "concept1",
        options: &[
          "class",
          "abstract class",
          "method overloading",
          "composition",
          "interface",
          "early binding",
          "shallow copy",
        ],
      },
      Variable {
        name: "concept2",
        options: &[
          "object",
          "interface",
          "method overriding",
          "inheritance",
          "abstract class",
          "late binding",
          "deep copy",
        ],
      },
    ],
    must_have: MustHave::ByPair {
      vars: ("concept1", "concept2"),
      table: &[
        (("class", "object"), &["blueprint", "instance", "template", "memory", "constructor"]),
        (("abstract class", "interface"), &["partial implementation", "contract", "extends", "implements"]),
        (("method overloading", "method overriding"), &["compile time", "runtime", "signature", "inheritance"]),
        (("composition", "inheritance"), &["has-a", "is-a", "flexibility", "coupling", "reuse"]),
        (("interface", "abstract class"), &["multiple inheritance", "default methods", "state", "abstract methods"]),
        (("early binding", "late binding"), &["compile time", "runtime", "static", "dynamic"]),
        (("shallow copy", "deep copy"), &["reference copy", "new objects", "nested", "independent"]),
      ],
      fallback: &["oop", "difference", "concept"],
    },
    bonus: &["when to use", "example", "advantage", "disadvantage"],
  },
  Template {
    pattern: "What is {concept} and why is it important in OOP?",
    variables: &[Variable {
      name: "concept",
      options: &[
        "the 'this' keyword",
        "the 'super' keyword",
        "method signature",
        "constructor overloading",
        "object initialization",
        "garbage collection",
        "object reference",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("the 'this' keyword", &["current object", "instance", "self-reference", "disambiguation"]),
        ("the 'super' keyword", &["parent class", "base class", "call parent", "inheritance"]),
        ("method signature", &["name", "parameters", "return type", "unique identifier"]),
        ("constructor overloading", &["multiple constructors", "different parameters", "flexibility"]),
        ("object initialization", &["create object", "allocate memory", "constructor", "new"]),
        ("garbage collection", &["automatic memory", "free unused", "gc", "heap"]),
        ("object reference", &["pointer", "memory address", "refer to object", "variable"]),
      ],
      fallback: &["oop", "concept", "importance"],
    },
    bonus: &["code example", "use case", "best practices", "common mistakes"],
  },
  Template {
    pattern: "Explain the concept of {relationship} relationship in OOP.",
    variables: &[Variable {
      name: "relationship",
      options: &["is-a", "has-a", "uses-a", "association", "aggregation", "composition"],
    }],
    must_have: MustHave::ByVar {
      var: "relationship",
      table: &[
        ("is-a", &["inheritance", "extends", "subclass", "superclass"]),
        ("has-a", &["composition", "member variable", "ownership", "contains"]),
        ("uses-a", &["dependency", "method parameter", "temporary", "uses"]),
        ("association", &["relationship", "connected", "uses", "knows about"]),
        ("aggregation", &["whole part", "can exist independently", "weak ownership"]),
        ("composition", &["strong ownership", "lifecycle", "cannot exist independently"]),
      ],
      fallback: &["relationship", "oop", "association"],
    },
    bonus: &["uml representation", "code example", "when to use", "comparison"],
  },
];

pub static MEDIUM: &[Template] = &[
  Template {
    pattern: "Explain the {principle} principle in SOLID and why it's important.",
    variables: &[Variable {
      name: "principle",
      options: &[
        "Single Responsibility",
        "Open-Closed",
        "Liskov Substitution",
        "Interface Segregation",
        "Dependency Inversion",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "principle",
      table: &[
        ("Single Responsibility", &["one reason to change", "single purpose", "cohesion", "separation"]),
        ("Open-Closed", &["open for extension", "closed for modification", "inheritance", "polymorphism"]),
        ("Liskov Substitution", &["substitutable", "subtype", "behavior", "contract", "parent child"]),
        ("Interface Segregation", &["small interfaces", "specific", "client", "not depend on unused"]),
        ("Dependency Inversion", &["abstractions", "high level", "low level", "depend on interface"]),
      ],
      fallback: &["solid", "principle", "design"],
    },
    bonus: &["code example", "violation example", "benefit", "refactoring"],
  },
  Template {
    pattern: "Describe the {pattern} design pattern and when to use it.",
    variables: &[Variable {
      name: "pattern",
      options: &[
        "Singleton",
        "Factory",
        "Abstract Factory",
        "Builder",
        "Prototype",
        "Observer",
        "Strategy",
        "Decorator",
        "Adapter",
        "Facade",
        "Proxy",
        "Command",
        "Template Method",
        "Iterator",
        "State",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "pattern",
      table: &[
        ("Singleton", &["single instance", "private constructor", "global access", "static"]),
        ("Factory", &["create objects", "interface", "subclass", "hide creation logic"]),
        ("Abstract Factory", &["family of objects", "related products", "consistency", "factory of factories"]),
        ("Builder", &["step by step", "complex object", "director", "separate construction"]),
        ("Prototype", &["clone", "copy", "prototype interface", "avoid creation cost"]),
        ("Observer", &["subscribe", "notify", "event", "one-to-many", "listener"]),
        ("Strategy", &["algorithm", "interchangeable", "encapsulate", "runtime"]),
        ("Decorator", &["add behavior", "wrapper", "extend", "runtime", "composition"]),
        ("Adapter", &["convert interface", "incompatible", "wrapper", "legacy"]),
        ("Facade", &["simple interface", "complex subsystem", "unified", "hide complexity"]),
        ("Proxy", &["placeholder", "control access", "lazy loading", "protection"]),
        ("Command", &["encapsulate request", "invoker", "receiver", "undo redo"]),
        ("Template Method", &["skeleton algorithm", "subclass steps", "abstract methods", "hook"]),
        ("Iterator", &["traverse", "sequential access", "collection", "next hasNext"]),
        ("State", &["state machine", "behavior change", "context", "state interface"]),
      ],
      fallback: &["design pattern", "creational", "behavioral"],
    },
    bonus: &["code example", "real-world use", "advantage", "uml diagram"],
  },
  Template {
    pattern: "Explain {concept} and its benefits in software design.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "loose coupling",
        "high cohesion",
        "separation of concerns",
        "dependency injection",
        "inversion of control",
        "programming to an interface",
        "favor composition over inheritance",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("loose coupling", &["independent", "minimal dependencies", "flexible", "maintainable"]),
        ("high cohesion", &["related functionality", "single purpose", "focused", "module"]),
        ("separation of concerns", &["different aspects", "modular", "independent changes"]),
        ("dependency injection", &["inject dependencies", "constructor", "setter", "framework"]),
        ("inversion of control", &["framework calls", "hollywood principle", "don't call us"]),
        ("programming to an interface", &["abstraction", "flexible", "swappable", "contract"]),
        ("favor composition over inheritance", &["has-a", "flexible", "delegation", "runtime"]),
      ],
      fallback: &["design", "principle", "software"],
    },
    bonus: &["example", "anti-pattern", "refactoring", "when to apply"],
  },
  Template {
    pattern: "How does {language} implement {feature}?",
    variables: &[
      Variable {
        name: "language",
        options: &["Java", "Python", "C++", "C#", "JavaScript"],
      },
      Variable {
        name: "feature",
        options: &[
          "multiple inheritance",
          "interfaces",
          "abstract classes",
          "generics/templates",
          "garbage collection",
        ],
      },
    ],
    must_have: MustHave::Fixed(&["implementation", "syntax", "behavior", "features"]),
    bonus: &["comparison with other languages", "best practices", "limitations", "examples"],
  },
  Template {
    pattern: "What are {pattern} patterns and give examples?",
    variables: &[Variable {
      name: "pattern",
      options: &["creational", "structural", "behavioral"],
    }],
    must_have: MustHave::ByVar {
      var: "pattern",
      table: &[
        ("creational", &["object creation", "singleton", "factory", "builder", "prototype"]),
        ("structural", &["class composition", "adapter", "decorator", "facade", "proxy"]),
        ("behavioral", &["object interaction", "observer", "strategy", "command", "state"]),
      ],
      fallback: &["pattern", "design", "category"],
    },
    bonus: &["when to use each", "combinations", "real-world applications", "anti-patterns"],
  },
];

pub static HARD: &[Template] = &[
  Template {
    pattern: "How would you implement {pattern} pattern to solve {problem}?",
    variables: &[
      Variable {
        name: "pattern",
        options: &[
          "Abstract Factory",
          "Builder",
          "Prototype",
          "Command",
          "State",
          "Composite",
          "Chain of Responsibility",
          "Mediator",
          "Memento",
          "Visitor",
          "Flyweight",
          "Bridge",
        ],
      },
      Variable {
        name: "problem",
        options: &[
          "object creation complexity",
          "complex object construction",
          "reducing coupling",
          "managing state transitions",
          "undo/redo functionality",
          "tree structures",
          "request handling pipeline",
        ],
      },
    ],
    must_have: MustHave::ByVar {
      var: "pattern",
      table: &[
        ("Abstract Factory", &["family of objects", "interface", "concrete factory", "related products"]),
        ("Builder", &["step by step", "complex object", "director", "separate construction"]),
        ("Prototype", &["clone", "copy", "prototype interface", "shallow deep"]),
        ("Command", &["encapsulate request", "invoker", "receiver", "undo redo"]),
        ("State", &["state machine", "behavior change", "context", "state interface"]),
        ("Composite", &["tree structure", "leaf", "composite", "uniform treatment"]),
        ("Chain of Responsibility", &["chain", "handler", "next", "pass along"]),
        ("Mediator", &["centralized", "communication", "decouple", "hub"]),
        ("Memento", &["snapshot", "state", "restore", "history"]),
        ("Visitor", &["separate algorithm", "double dispatch", "add operations", "elements"]),
        ("Flyweight", &["shared objects", "intrinsic extrinsic", "memory", "factory"]),
        ("Bridge", &["abstraction implementation", "decouple", "vary independently", "hierarchy"]),
      ],
      fallback: &["design pattern", "implementation", "structure"],
    },
    bonus: &["code implementation", "participants", "consequences", "related patterns"],
  },
  Template {
    pattern: "Explain {concept} and how it affects software architecture.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "the Law of Demeter",
        "Tell Don't Ask principle",
        "GRASP patterns",
        "Clean Architecture",
        "Hexagonal Architecture",
        "Domain-Driven Design principles",
        "CQRS pattern",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("the Law of Demeter", &["talk to friends", "minimal knowledge", "coupling", "chaining"]),
        ("Tell Don't Ask principle", &["tell objects", "don't ask for data", "behavior", "encapsulation"]),
        ("GRASP patterns", &["general responsibility", "assignment", "information expert", "controller"]),
        ("Clean Architecture", &["layers", "dependencies inward", "entities", "use cases"]),
        ("Hexagonal Architecture", &["ports", "adapters", "domain", "infrastructure"]),
        ("Domain-Driven Design principles", &["domain model", "ubiquitous language", "bounded context", "aggregates"]),
        ("CQRS pattern", &["command", "query", "separation", "read write models"]),
      ],
      fallback: &["architecture", "principle", "design"],
    },
    bonus: &["implementation", "examples", "trade-offs", "when to use"],
  },
  Template {
    pattern: "Discuss the trade-offs between {approach1} and {approach2} in system design.",
    variables: &[
      Variable {
        name: "approach1",
        options: &["inheritance", "mutable state", "eager loading", "synchronous processing"],
      },
      Variable {
        name: "approach2",
        options: &["composition", "immutable objects", "lazy loading", "asynchronous processing"],
      },
    ],
    must_have: MustHave::Fixed(&["trade-off", "comparison", "when to use", "considerations"]),
    bonus: &["performance", "maintainability", "examples", "hybrid approaches"],
  },
  Template {
    pattern: "How do you handle {challenge} in object-oriented design?",
    variables: &[Variable {
      name: "challenge",
      options: &[
        "circular dependencies",
        "god objects",
        "feature envy",
        "primitive obsession",
        "shotgun surgery",
        "divergent change",
        "parallel inheritance hierarchies",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "challenge",
      table: &[
        ("circular dependencies", &["break cycle", "interface", "dependency inversion", "restructure"]),
        ("god objects", &["split responsibilities", "srp", "extract class", "refactor"]),
        ("feature envy", &["move method", "belongs elsewhere", "data with behavior"]),
        ("primitive obsession", &["value objects", "domain types", "encapsulate", "meaning"]),
        ("shotgun surgery", &["consolidate", "single point", "spread changes", "group"]),
        ("divergent change", &["split class", "separate concerns", "single responsibility"]),
        ("parallel inheritance hierarchies", &["composition", "strategy", "reduce coupling"]),
      ],
      fallback: &["code smell", "refactoring", "solution"],
    },
    bonus: &["detection", "refactoring steps", "prevention", "examples"],
  },
];
