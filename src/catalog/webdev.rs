//! Web development templates.

use super::{MustHave, Template, Variable};

pub static EASY: &[Template] = &[
  Template {
    pattern: "Explain {concept} in web development.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "the CSS box model",
        "semantic HTML",
        "responsive design",
        "CSS flexbox",
        "CSS grid",
        "media queries",
        "CSS selectors",
        "CSS specificity",
        "the DOM",
        "browser developer tools",
        "HTML forms",
        "accessibility basics",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("the CSS box model", &["margin", "border", "padding", "content", "box-sizing"]),
        ("semantic HTML", &["meaning", "accessibility", "seo", "header", "nav", "article"]),
        ("responsive design", &["media queries", "breakpoints", "mobile", "viewport", "flexible"]),
        ("CSS flexbox", &["flex container", "flex items", "justify-content", "align-items", "direction"]),
        ("CSS grid", &["grid container", "rows", "columns", "template", "gap"]),
        ("media queries", &["breakpoint", "responsive", "screen size", "min-width", "max-width"]),
        ("CSS selectors", &["class", "id", "element", "descendant", "pseudo"]),
        ("CSS specificity", &["inline", "id", "class", "element", "cascade"]),
        ("the DOM", &["document object model", "tree", "nodes", "manipulation", "javascript"]),
        ("browser developer tools", &["inspect", "console", "network", "debug", "elements"]),
        ("HTML forms", &["input", "submit", "action", "method", "validation"]),
        ("accessibility basics", &["aria", "alt text", "keyboard", "screen reader", "wcag"]),
      ],
      fallback: &["web", "css", "html"],
    },
    bonus: &["example", "browser support", "best practice", "use case"],
  },
  Template {
    pattern: "What is the difference between {concept1} and {concept2} in JavaScript?",
    variables: &[
      Variable {
        name: "concept1",
        options: &[
          "var",
          "let",
          "null",
          "==",
          "synchronous",
          "call",
          "forEach",
          "function declaration",
          "primitive types",
        ],
      },
      Variable {
        name: "concept2",
        options: &[
          "let/const",
          "const",
          "undefined",
          "===",
          "asynchronous",
          "apply/bind",
          "map",
          "function expression",
          "reference types",
        ],
      },
    ],
    must_have: MustHave::ByPair {
      vars: ("concept1", "concept2"),
      table: &[
        (("var", "let/const"), &["scope", "hoisting", "block scope", "function scope", "redeclaration"]),
        (("let", "const"), &["reassign", "constant", "block scope", "declaration"]),
        (("null", "undefined"), &["intentional", "uninitialized", "absence", "type"]),
        (("==", "==="), &["type coercion", "strict equality", "comparison", "type check"]),
        (("synchronous", "asynchronous"), &["blocking", "non-blocking", "callback", "promise", "execution"]),
        (("call", "apply/bind"), &["invoke", "context", "arguments", "array", "new function"]),
        (("forEach", "map"), &["return value", "side effects", "transform", "new array"]),
        (("function declaration", "function expression"), &["hoisting", "named", "anonymous", "assignment"]),
        (("primitive types", "reference types"), &["value", "reference", "stack", "heap", "copy"]),
      ],
      fallback: &["javascript", "difference", "concept"],
    },
    bonus: &["example", "when to use", "common mistakes", "best practice"],
  },
  Template {
    pattern: "Explain what {element} is used for in HTML.",
    variables: &[Variable {
      name: "element",
      options: &[
        "the <head> tag",
        "the <meta> tag",
        "the <link> tag",
        "the <script> tag",
        "the <div> tag",
        "the <span> tag",
        "the <section> tag",
        "the <article> tag",
      ],
    }],
    must_have: MustHave::Fixed(&["html", "element", "purpose", "usage"]),
    bonus: &["attributes", "examples", "best practices", "accessibility"],
  },
  Template {
    pattern: "What are {concept} and how are they used?",
    variables: &[Variable {
      name: "concept",
      options: &[
        "CSS variables",
        "CSS pseudo-classes",
        "CSS pseudo-elements",
        "CSS animations",
        "CSS transitions",
        "CSS units (px, em, rem, vh, vw)",
      ],
    }],
    must_have: MustHave::Fixed(&["css", "definition", "syntax", "usage"]),
    bonus: &["examples", "browser support", "best practices", "performance"],
  },
];

pub static MEDIUM: &[Template] = &[
  Template {
    pattern: "Explain how {concept} works in JavaScript.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "the event loop",
        "closures",
        "promises",
        "async/await",
        "prototypal inheritance",
        "the 'this' keyword",
        "hoisting",
        "event bubbling and capturing",
        "the spread operator",
        "destructuring",
        "modules (ES6)",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("the event loop", &["call stack", "callback queue", "single threaded", "asynchronous", "microtask"]),
        ("closures", &["inner function", "outer scope", "lexical environment", "preserve state"]),
        ("promises", &["pending", "fulfilled", "rejected", "then", "catch", "async"]),
        ("async/await", &["async function", "await", "promise", "syntactic sugar", "try catch"]),
        ("prototypal inheritance", &["prototype", "__proto__", "prototype chain", "object.create"]),
        ("the 'this' keyword", &["context", "binding", "call apply bind", "arrow functions"]),
        ("hoisting", &["declaration", "top of scope", "var", "function", "temporal dead zone"]),
        ("event bubbling and capturing", &["propagation", "target", "bubbles up", "captures down"]),
        ("the spread operator", &["...", "expand", "copy", "merge", "arguments"]),
        ("destructuring", &["extract", "object array", "assignment", "default values"]),
        ("modules (ES6)", &["import", "export", "default", "named", "tree shaking"]),
      ],
      fallback: &["javascript", "concept", "advanced"],
    },
    bonus: &["code example", "use case", "common pitfalls", "alternative"],
  },
  Template {
    pattern: "What is {concept} and why is it important in modern web development?",
    variables: &[Variable {
      name: "concept",
      options: &[
        "REST API design",
        "CORS",
        "JWT authentication",
        "WebSockets",
        "Service Workers",
        "Progressive Web Apps",
        "Server-Side Rendering",
        "Static Site Generation",
        "Single Page Applications",
        "Web Components",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("REST API design", &["resources", "http methods", "stateless", "endpoints", "json"]),
        ("CORS", &["cross-origin", "preflight", "headers", "same-origin policy", "access-control"]),
        ("JWT authentication", &["json web token", "stateless", "claims", "signature", "bearer"]),
        ("WebSockets", &["bidirectional", "real-time", "persistent connection", "ws protocol"]),
        ("Service Workers", &["background", "offline", "cache", "push notifications", "pwa"]),
        ("Progressive Web Apps", &["pwa", "installable", "offline", "app-like", "manifest"]),
        ("Server-Side Rendering", &["ssr", "initial load", "seo", "hydration", "server"]),
        ("Static Site Generation", &["ssg", "build time", "html", "fast", "cdn"]),
        ("Single Page Applications", &["spa", "client-side routing", "dynamic", "javascript"]),
        ("Web Components", &["custom elements", "shadow dom", "templates", "encapsulation"]),
      ],
      fallback: &["web", "concept", "modern"],
    },
    bonus: &["implementation", "frameworks", "security", "performance"],
  },
  Template {
    pattern: "Explain {framework/library} and when to use it.",
    variables: &[Variable {
      name: "framework/library",
      options: &[
        "React",
        "Vue.js",
        "Angular",
        "Next.js",
        "Node.js",
        "Express.js",
        "TypeScript",
        "Tailwind CSS",
        "Redux/Zustand",
        "React Query/TanStack Query",
      ],
    }],
    must_have: MustHave::Fixed(&["framework", "use case", "features", "advantages"]),
    bonus: &["comparison", "learning curve", "ecosystem", "best practices"],
  },
  Template {
    pattern: "How do you implement {feature} in a web application?",
    variables: &[Variable {
      name: "feature",
      options: &[
        "user authentication",
        "form validation",
        "state management",
        "routing",
        "API integration",
        "error handling",
        "lazy loading",
        "infinite scroll",
        "dark mode toggle",
      ],
    }],
    must_have: MustHave::Fixed(&["implementation", "steps", "approach", "considerations"]),
    bonus: &["libraries", "best practices", "security", "performance"],
  },
  Template {
    pattern: "Explain {concept} in the context of web security.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "XSS (Cross-Site Scripting)",
        "CSRF (Cross-Site Request Forgery)",
        "SQL Injection",
        "content security policy",
        "HTTPS",
        "input sanitization",
        "secure cookies",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("XSS (Cross-Site Scripting)", &["script injection", "sanitize", "escape", "dom manipulation"]),
        ("CSRF (Cross-Site Request Forgery)", &["token", "same-site", "origin check", "unauthorized actions"]),
        ("SQL Injection", &["parameterized", "escape", "orm", "malicious query"]),
        ("content security policy", &["csp header", "allowed sources", "inline", "nonce"]),
        ("HTTPS", &["tls", "encryption", "certificate", "secure connection"]),
        ("input sanitization", &["validate", "escape", "whitelist", "user input"]),
        ("secure cookies", &["httponly", "secure", "samesite", "expiration"]),
      ],
      fallback: &["security", "web", "protection"],
    },
    bonus: &["prevention techniques", "examples", "tools", "best practices"],
  },
];

pub static HARD: &[Template] = &[
  Template {
    pattern: "Explain {concept} and how it improves web performance.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "code splitting",
        "tree shaking",
        "bundle optimization",
        "critical rendering path",
        "lazy loading strategies",
        "image optimization",
        "caching strategies",
        "CDN usage",
        "performance metrics (LCP, FID, CLS)",
        "Web Workers",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("code splitting", &["dynamic import", "chunks", "on-demand", "reduce initial load"]),
        ("tree shaking", &["dead code elimination", "unused exports", "bundle size", "es modules"]),
        ("bundle optimization", &["minification", "compression", "splitting", "analysis"]),
        ("critical rendering path", &["render blocking", "above the fold", "inline critical css"]),
        ("lazy loading strategies", &["intersection observer", "on-demand", "images", "components"]),
        ("image optimization", &["compression", "formats", "responsive images", "srcset"]),
        ("caching strategies", &["cache-control", "etag", "service worker", "stale-while-revalidate"]),
        ("CDN usage", &["edge servers", "geographic distribution", "caching", "latency"]),
        ("performance metrics (LCP, FID, CLS)", &["largest contentful paint", "first input delay", "cumulative layout shift", "core web vitals"]),
        ("Web Workers", &["background thread", "offload computation", "message passing", "non-blocking"]),
      ],
      fallback: &["performance", "optimization", "web"],
    },
    bonus: &["tools", "measurement", "best practices", "trade-offs"],
  },
  Template {
    pattern: "How would you architect a {type} web application?",
    variables: &[Variable {
      name: "type",
      options: &[
        "large-scale e-commerce",
        "real-time collaborative",
        "high-traffic content",
        "micro-frontend",
        "progressive web app",
        "headless CMS powered",
      ],
    }],
    must_have: MustHave::Fixed(&["architecture", "considerations", "technologies", "patterns"]),
    bonus: &["scalability", "maintainability", "team structure", "deployment"],
  },
  Template {
    pattern: "Discuss {pattern} in modern frontend development.",
    variables: &[Variable {
      name: "pattern",
      options: &[
        "component composition patterns",
        "state management patterns",
        "rendering patterns (CSR, SSR, SSG, ISR)",
        "micro-frontends",
        "module federation",
        "atomic design",
        "BEM methodology",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "pattern",
      table: &[
        ("component composition patterns", &["compound components", "render props", "hoc", "hooks"]),
        ("state management patterns", &["flux", "atomic state", "context", "server state"]),
        ("rendering patterns (CSR, SSR, SSG, ISR)", &["client", "server", "static", "incremental"]),
        ("micro-frontends", &["independent teams", "separate deployments", "isolation", "integration"]),
        ("module federation", &["webpack 5", "shared modules", "runtime loading", "distributed"]),
        ("atomic design", &["atoms", "molecules", "organisms", "templates", "pages"]),
        ("BEM methodology", &["block", "element", "modifier", "naming convention", "css"]),
      ],
      fallback: &["pattern", "frontend", "architecture"],
    },
    bonus: &["implementation", "pros cons", "when to use", "examples"],
  },
  Template {
    pattern: "Explain {advanced_topic} in JavaScript.",
    variables: &[Variable {
      name: "advanced_topic",
      options: &[
        "proxy and reflect",
        "symbols",
        "generators and iterators advanced",
        "weak map and weak set",
        "shared array buffer",
        "Intl API",
        "temporal API (upcoming)",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "advanced_topic",
      table: &[
        ("proxy and reflect", &["trap", "handler", "intercept", "meta programming"]),
        ("symbols", &["unique", "primitive", "well-known", "symbol.iterator"]),
        ("generators and iterators advanced", &["yield*", "two-way communication", "async generators"]),
        ("weak map and weak set", &["garbage collection", "no iteration", "weak reference", "memory"]),
        ("shared array buffer", &["shared memory", "atomics", "concurrent", "workers"]),
        ("Intl API", &["internationalization", "formatting", "locale", "collation"]),
        ("temporal API (upcoming)", &["date time", "immutable", "timezone", "duration"]),
      ],
      fallback: &["javascript", "advanced", "feature"],
    },
    bonus: &["use cases", "examples", "browser support", "polyfills"],
  },
  Template {
    pattern: "How do you handle {challenge} in frontend development?",
    variables: &[Variable {
      name: "challenge",
      options: &[
        "memory leaks",
        "race conditions",
        "infinite loops in rendering",
        "complex form state",
        "optimistic updates",
        "offline-first architecture",
        "cross-browser compatibility",
      ],
    }],
    must_have: MustHave::Fixed(&["challenge", "solution", "techniques", "prevention"]),
    bonus: &["debugging tools", "common causes", "best practices", "examples"],
  },
];
