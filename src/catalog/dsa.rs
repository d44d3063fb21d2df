//! Data structures & algorithms templates.

use super::{MustHave, Template, Variable};

pub static EASY: &[Template] = &[
  Template {
    pattern: "Explain the time complexity of {algorithm} and why it is {characteristic}.",
    variables: &[
      Variable {
        name: "algorithm",
        options: &[
          "binary search",
          "linear search",
          "bubble sort",
          "insertion sort",
          "selection sort",
          "counting sort",
          "jump search",
          "interpolation search",
        ],
      },
      Variable {
        name: "characteristic",
        options: &[
          "efficient",
          "used in practice",
          "suitable for small datasets",
          "easy to implement",
          "preferred for nearly sorted data",
          "optimal for specific use cases",
        ],
      },
    ],
    must_have: MustHave::ByVar {
      var: "algorithm",
      table: &[
        ("binary search", &["o(log n)", "logarithmic", "sorted", "divide"]),
        ("linear search", &["o(n)", "linear", "sequential", "simple"]),
        ("bubble sort", &["o(n^2)", "quadratic", "swap", "adjacent"]),
        ("insertion sort", &["o(n^2)", "quadratic", "shift", "sorted portion"]),
        ("selection sort", &["o(n^2)", "quadratic", "minimum", "swap"]),
        ("counting sort", &["o(n+k)", "linear", "non-comparison", "count array"]),
        ("jump search", &["o(√n)", "root n", "block", "jump"]),
        ("interpolation search", &["o(log log n)", "probe", "uniform", "calculated position"]),
      ],
      fallback: &["complexity", "time", "efficient"],
    },
    bonus: &["best case", "worst case", "average case", "comparison", "in-place"],
  },
  Template {
    pattern: "What is the difference between {structure1} and {structure2}?",
    variables: &[
      Variable {
        name: "structure1",
        options: &["stack", "array", "linked list", "queue", "deque", "priority queue", "circular queue"],
      },
      Variable {
        name: "structure2",
        options: &["queue", "linked list", "array", "stack", "circular buffer", "heap", "linear queue"],
      },
    ],
    must_have: MustHave::ByPair {
      vars: ("structure1", "structure2"),
      table: &[
        (("stack", "queue"), &["lifo", "fifo", "push", "pop"]),
        (("array", "linked list"), &["contiguous", "nodes", "index", "pointer"]),
        (("linked list", "array"), &["dynamic", "static", "memory", "access"]),
        (("queue", "stack"), &["fifo", "lifo", "enqueue", "dequeue"]),
        (("deque", "circular buffer"), &["double ended", "circular", "front", "rear"]),
        (("priority queue", "heap"), &["priority", "complete tree", "max", "min"]),
        (("circular queue", "linear queue"), &["circular", "front rear", "wrap around", "overflow"]),
      ],
      fallback: &["structure", "operations", "access", "memory"],
    },
    bonus: &["implementation", "use case", "complexity", "memory allocation"],
  },
  Template {
    pattern: "What is a {dataStructure} and where is it commonly used?",
    variables: &[Variable {
      name: "dataStructure",
      options: &[
        "binary tree",
        "linked list",
        "hash map",
        "heap",
        "graph",
        "trie",
        "stack",
        "queue",
        "deque",
        "set",
        "multiset",
        "priority queue",
        "circular buffer",
        "skip list",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "dataStructure",
      table: &[
        ("binary tree", &["node", "left", "right", "root", "traversal"]),
        ("linked list", &["node", "pointer", "next", "head", "dynamic"]),
        ("hash map", &["key", "value", "hash function", "lookup", "o(1)"]),
        ("heap", &["priority", "complete tree", "parent", "child", "extract"]),
        ("graph", &["vertex", "edge", "node", "connection", "path"]),
        ("trie", &["prefix", "tree", "characters", "search", "autocomplete"]),
        ("stack", &["lifo", "push", "pop", "top", "function calls"]),
        ("queue", &["fifo", "enqueue", "dequeue", "front", "rear"]),
        ("deque", &["double ended", "front", "rear", "insert", "delete"]),
        ("set", &["unique", "no duplicates", "membership", "union", "intersection"]),
        ("multiset", &["duplicates allowed", "count", "frequency", "sorted"]),
        ("priority queue", &["priority", "highest first", "heap", "extract max"]),
        ("circular buffer", &["fixed size", "wrap around", "producer consumer", "ring buffer"]),
        ("skip list", &["probabilistic", "layers", "fast search", "linked list"]),
      ],
      fallback: &["structure", "data", "operations"],
    },
    bonus: &["implementation", "real-world", "application", "advantage"],
  },
  Template {
    pattern: "Explain the concept of {concept} in data structures.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "recursion",
        "iteration",
        "time complexity",
        "space complexity",
        "in-place algorithms",
        "stable sorting",
        "comparison-based sorting",
        "linear data structures",
        "non-linear data structures",
        "abstract data types",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("recursion", &["base case", "recursive case", "call stack", "function calls itself"]),
        ("iteration", &["loop", "repetition", "while", "for", "increment"]),
        ("time complexity", &["big o", "operations", "input size", "growth rate"]),
        ("space complexity", &["memory", "auxiliary space", "input space", "algorithm memory"]),
        ("in-place algorithms", &["constant space", "o(1) space", "modify input", "no extra array"]),
        ("stable sorting", &["relative order", "equal elements", "preserve", "original position"]),
        ("comparison-based sorting", &["compare elements", "o(n log n)", "lower bound", "decision tree"]),
        ("linear data structures", &["sequential", "one after another", "array", "list"]),
        ("non-linear data structures", &["hierarchical", "tree", "graph", "multiple paths"]),
        ("abstract data types", &["interface", "operations", "implementation independent", "behavior"]),
      ],
      fallback: &["concept", "data structure", "algorithm"],
    },
    bonus: &["example", "when to use", "advantage", "limitation"],
  },
  Template {
    pattern: "How does {operation} work in a {structure}?",
    variables: &[
      Variable {
        name: "operation",
        options: &["insertion", "deletion", "searching", "traversal", "accessing elements", "updating"],
      },
      Variable {
        name: "structure",
        options: &["array", "linked list", "binary search tree", "hash table", "heap", "stack", "queue"],
      },
    ],
    must_have: MustHave::Fixed(&["operation", "step", "algorithm", "complexity"]),
    bonus: &["time complexity", "edge cases", "implementation", "best case"],
  },
  Template {
    pattern: "What are the advantages of using {structure} over {alternative}?",
    variables: &[
      Variable {
        name: "structure",
        options: &["linked list", "array", "hash table", "tree", "heap"],
      },
      Variable {
        name: "alternative",
        options: &["array", "linked list", "binary search tree", "sorted array", "sorted linked list"],
      },
    ],
    must_have: MustHave::Fixed(&["advantage", "performance", "memory", "use case"]),
    bonus: &["disadvantage", "when to prefer", "trade-off", "complexity comparison"],
  },
  Template {
    pattern: "Explain {traversal} traversal in a binary tree.",
    variables: &[Variable {
      name: "traversal",
      options: &["inorder", "preorder", "postorder", "level order", "zigzag level order", "boundary"],
    }],
    must_have: MustHave::ByVar {
      var: "traversal",
      table: &[
        ("inorder", &["left root right", "sorted order", "bst", "recursive"]),
        ("preorder", &["root left right", "copy tree", "prefix", "recursive"]),
        ("postorder", &["left right root", "delete tree", "postfix", "recursive"]),
        ("level order", &["bfs", "queue", "level by level", "breadth first"]),
        ("zigzag level order", &["alternating", "left right", "right left", "deque"]),
        ("boundary", &["left boundary", "leaves", "right boundary", "anticlockwise"]),
      ],
      fallback: &["traversal", "visit", "order"],
    },
    bonus: &["recursive implementation", "iterative implementation", "time complexity", "use case"],
  },
  Template {
    pattern: "What is Big O notation and how do we calculate {complexity}?",
    variables: &[Variable {
      name: "complexity",
      options: &["O(1)", "O(n)", "O(n^2)", "O(log n)", "O(n log n)", "O(2^n)"],
    }],
    must_have: MustHave::ByVar {
      var: "complexity",
      table: &[
        ("O(1)", &["constant", "fixed time", "independent of input", "hash lookup"]),
        ("O(n)", &["linear", "proportional", "single loop", "array traversal"]),
        ("O(n^2)", &["quadratic", "nested loops", "bubble sort", "square"]),
        ("O(log n)", &["logarithmic", "halving", "binary search", "divide"]),
        ("O(n log n)", &["linearithmic", "merge sort", "efficient sorting", "divide conquer"]),
        ("O(2^n)", &["exponential", "recursive fibonacci", "subset generation", "power set"]),
      ],
      fallback: &["complexity", "time", "operations"],
    },
    bonus: &["example algorithm", "comparison", "best case", "worst case"],
  },
];

pub static MEDIUM: &[Template] = &[
  Template {
    pattern: "Explain how {algorithm} works and analyze its time complexity.",
    variables: &[Variable {
      name: "algorithm",
      options: &[
        "merge sort",
        "quick sort",
        "heap sort",
        "counting sort",
        "radix sort",
        "bucket sort",
        "shell sort",
        "tim sort",
        "comb sort",
        "cocktail sort",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "algorithm",
      table: &[
        ("merge sort", &["divide", "conquer", "merge", "o(n log n)", "stable"]),
        ("quick sort", &["pivot", "partition", "o(n log n)", "in-place", "divide"]),
        ("heap sort", &["heap", "extract max", "o(n log n)", "heapify", "complete tree"]),
        ("counting sort", &["count", "frequency", "o(n+k)", "non-comparison", "stable"]),
        ("radix sort", &["digit", "bucket", "o(nk)", "non-comparison", "stable"]),
        ("bucket sort", &["bucket", "distribute", "o(n+k)", "uniform distribution", "range"]),
        ("shell sort", &["gap", "insertion sort", "diminishing increment", "comparison"]),
        ("tim sort", &["hybrid", "merge insertion", "runs", "real world data"]),
        ("comb sort", &["gap", "shrink factor", "bubble sort improvement", "1.3"]),
        ("cocktail sort", &["bidirectional", "bubble sort variant", "left right", "shaker sort"]),
      ],
      fallback: &["sort", "complexity", "efficient"],
    },
    bonus: &["space complexity", "stable", "in-place", "best case", "worst case"],
  },
  Template {
    pattern: "What is {concept} and when would you use it in problem solving?",
    variables: &[Variable {
      name: "concept",
      options: &[
        "dynamic programming",
        "greedy algorithm",
        "backtracking",
        "divide and conquer",
        "two pointer technique",
        "sliding window",
        "binary search on answer",
        "bit manipulation",
        "prefix sum",
        "monotonic stack",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("dynamic programming", &["subproblems", "overlapping", "memoization", "optimal", "tabulation"]),
        ("greedy algorithm", &["local optimal", "greedy choice", "feasible", "optimization"]),
        ("backtracking", &["recursive", "explore", "backtrack", "constraints", "solution space"]),
        ("divide and conquer", &["divide", "conquer", "combine", "subproblems", "recursive"]),
        ("two pointer technique", &["two pointers", "left", "right", "sorted", "o(n)"]),
        ("sliding window", &["window", "expand", "shrink", "contiguous", "substring"]),
        ("binary search on answer", &["search space", "monotonic", "check function", "optimal value"]),
        ("bit manipulation", &["bits", "xor", "and", "or", "shift"]),
        ("prefix sum", &["cumulative sum", "range query", "preprocessing", "o(1) query"]),
        ("monotonic stack", &["increasing", "decreasing", "next greater", "previous smaller"]),
      ],
      fallback: &["algorithm", "approach", "solve"],
    },
    bonus: &["example problem", "time complexity", "space complexity", "optimization"],
  },
  Template {
    pattern: "How would you detect {problem} in a {structure}?",
    variables: &[
      Variable {
        name: "problem",
        options: &[
          "a cycle",
          "duplicates",
          "the middle element",
          "if it's balanced",
          "the kth largest element",
          "if two structures are identical",
          "a palindrome",
        ],
      },
      Variable {
        name: "structure",
        options: &["linked list", "binary tree", "array", "graph", "string", "binary search tree"],
      },
    ],
    must_have: MustHave::Fixed(&["traverse", "check", "algorithm", "detect"]),
    bonus: &["time complexity", "space complexity", "optimal", "approach"],
  },
  Template {
    pattern: "Explain {graphAlgorithm} and its applications.",
    variables: &[Variable {
      name: "graphAlgorithm",
      options: &[
        "BFS (Breadth First Search)",
        "DFS (Depth First Search)",
        "topological sorting",
        "detecting cycles in graph",
        "finding connected components",
        "finding bridges",
        "finding articulation points",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "graphAlgorithm",
      table: &[
        ("BFS (Breadth First Search)", &["queue", "level order", "shortest path unweighted", "visited"]),
        ("DFS (Depth First Search)", &["stack", "recursive", "backtracking", "visited", "explore"]),
        ("topological sorting", &["dag", "linear ordering", "dependencies", "kahn's algorithm"]),
        ("detecting cycles in graph", &["visited", "recursion stack", "back edge", "dfs"]),
        ("finding connected components", &["dfs", "bfs", "union find", "groups"]),
        ("finding bridges", &["dfs", "discovery time", "low link", "cut edge"]),
        ("finding articulation points", &["dfs", "discovery time", "low link", "cut vertex"]),
      ],
      fallback: &["graph", "algorithm", "traversal"],
    },
    bonus: &["time complexity", "space complexity", "implementation", "real-world use"],
  },
  Template {
    pattern: "How do you implement {dataStructure} from scratch?",
    variables: &[Variable {
      name: "dataStructure",
      options: &[
        "a hash table",
        "a binary heap",
        "a trie",
        "a segment tree",
        "a disjoint set (Union-Find)",
        "an LRU cache",
        "a min-max heap",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "dataStructure",
      table: &[
        ("a hash table", &["array", "hash function", "collision handling", "chaining", "probing"]),
        ("a binary heap", &["array representation", "heapify", "parent child", "complete tree"]),
        ("a trie", &["nodes", "children map", "end of word", "insert search"]),
        ("a segment tree", &["build", "update", "query", "range operations", "tree array"]),
        ("a disjoint set (Union-Find)", &["parent array", "find", "union", "path compression", "rank"]),
        ("an LRU cache", &["hash map", "doubly linked list", "get put", "eviction"]),
        ("a min-max heap", &["alternate levels", "min root", "max level", "double comparisons"]),
      ],
      fallback: &["implementation", "methods", "data structure"],
    },
    bonus: &["time complexity of operations", "space complexity", "edge cases", "optimizations"],
  },
  Template {
    pattern: "What is the difference between {approach1} and {approach2} in solving DP problems?",
    variables: &[
      Variable {
        name: "approach1",
        options: &["top-down (memoization)", "1D DP", "recursion with memoization"],
      },
      Variable {
        name: "approach2",
        options: &["bottom-up (tabulation)", "2D DP", "iterative DP"],
      },
    ],
    must_have: MustHave::Fixed(&["dynamic programming", "subproblem", "optimal", "state"]),
    bonus: &["space optimization", "time complexity", "when to use which", "example"],
  },
  Template {
    pattern: "Explain how to solve the {problem} problem efficiently.",
    variables: &[Variable {
      name: "problem",
      options: &[
        "two sum",
        "three sum",
        "maximum subarray",
        "longest increasing subsequence",
        "merge intervals",
        "meeting rooms",
        "valid parentheses",
        "product of array except self",
        "rotate array",
        "search in rotated sorted array",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "problem",
      table: &[
        ("two sum", &["hash map", "complement", "o(n)", "index pair"]),
        ("three sum", &["sort", "two pointer", "o(n^2)", "skip duplicates"]),
        ("maximum subarray", &["kadane", "running sum", "max so far", "o(n)"]),
        ("longest increasing subsequence", &["dp", "binary search", "patience sort", "o(n log n)"]),
        ("merge intervals", &["sort", "overlap", "merge", "result array"]),
        ("meeting rooms", &["sort by start", "overlap check", "greedy"]),
        ("valid parentheses", &["stack", "matching", "push pop", "empty stack"]),
        ("product of array except self", &["prefix", "suffix", "no division", "o(n)"]),
        ("rotate array", &["reverse", "k mod n", "in-place", "three reverses"]),
        ("search in rotated sorted array", &["binary search", "pivot", "sorted half", "o(log n)"]),
      ],
      fallback: &["algorithm", "approach", "solution"],
    },
    bonus: &["time complexity", "space complexity", "follow-up", "edge cases"],
  },
];

pub static HARD: &[Template] = &[
  Template {
    pattern: "Explain {algorithm} for {problem} and discuss its complexity.",
    variables: &[
      Variable {
        name: "algorithm",
        options: &[
          "Dijkstra's algorithm",
          "Bellman-Ford algorithm",
          "Floyd-Warshall algorithm",
          "Kruskal's algorithm",
          "Prim's algorithm",
          "A* search algorithm",
          "Johnson's algorithm",
          "Tarjan's algorithm",
        ],
      },
      Variable {
        name: "problem",
        options: &[
          "shortest path",
          "minimum spanning tree",
          "graph traversal",
          "network flow",
          "strongly connected components",
          "all pairs shortest path",
        ],
      },
    ],
    must_have: MustHave::ByVar {
      var: "algorithm",
      table: &[
        ("Dijkstra's algorithm", &["shortest path", "greedy", "priority queue", "non-negative", "relaxation"]),
        ("Bellman-Ford algorithm", &["shortest path", "negative weights", "relaxation", "v-1 iterations"]),
        ("Floyd-Warshall algorithm", &["all pairs", "dynamic programming", "matrix", "intermediate"]),
        ("Kruskal's algorithm", &["minimum spanning tree", "union find", "sorted edges", "greedy"]),
        ("Prim's algorithm", &["minimum spanning tree", "greedy", "priority queue", "vertex based"]),
        ("A* search algorithm", &["heuristic", "admissible", "f=g+h", "optimal path"]),
        ("Johnson's algorithm", &["all pairs", "reweighting", "bellman ford dijkstra", "sparse graphs"]),
        ("Tarjan's algorithm", &["strongly connected", "dfs", "low link", "scc"]),
      ],
      fallback: &["graph", "algorithm", "complexity"],
    },
    bonus: &["time complexity", "space complexity", "application", "optimization", "proof"],
  },
  Template {
    pattern: "How would you solve the {problem} problem using {technique}?",
    variables: &[
      Variable {
        name: "problem",
        options: &[
          "longest common subsequence",
          "knapsack",
          "coin change",
          "edit distance",
          "matrix chain multiplication",
          "longest palindromic substring",
          "word break",
          "regular expression matching",
          "wildcard matching",
          "palindrome partitioning",
        ],
      },
      Variable {
        name: "technique",
        options: &["dynamic programming", "memoization", "tabulation", "space-optimized DP"],
      },
    ],
    must_have: MustHave::ByVar {
      var: "problem",
      table: &[
        ("longest common subsequence", &["lcs", "subsequence", "dp table", "match", "max"]),
        ("knapsack", &["weight", "value", "capacity", "include", "exclude"]),
        ("coin change", &["coins", "minimum", "amount", "dp", "subproblem"]),
        ("edit distance", &["insert", "delete", "replace", "minimum operations", "dp table"]),
        ("matrix chain multiplication", &["parenthesization", "cost", "optimal", "multiplication"]),
        ("longest palindromic substring", &["expand around center", "dp", "palindrome", "manacher"]),
        ("word break", &["dictionary", "dp", "prefix", "substring"]),
        ("regular expression matching", &["dot star", "dp", "pattern", "match"]),
        ("wildcard matching", &["question star", "dp", "greedy", "pattern"]),
        ("palindrome partitioning", &["partition", "minimum cuts", "dp", "palindrome check"]),
      ],
      fallback: &["dynamic programming", "optimal", "subproblem"],
    },
    bonus: &["recurrence relation", "base case", "time complexity", "space optimization"],
  },
  Template {
    pattern: "Explain the {algorithm} algorithm and its use in competitive programming.",
    variables: &[Variable {
      name: "algorithm",
      options: &[
        "KMP (Knuth-Morris-Pratt)",
        "Rabin-Karp",
        "Z-algorithm",
        "Manacher's",
        "Suffix Array",
        "Fenwick Tree (BIT)",
        "Heavy-Light Decomposition",
        "Mo's algorithm",
        "Square Root Decomposition",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "algorithm",
      table: &[
        ("KMP (Knuth-Morris-Pratt)", &["pattern matching", "failure function", "lps array", "o(n+m)"]),
        ("Rabin-Karp", &["rolling hash", "pattern matching", "hash collision", "multiple patterns"]),
        ("Z-algorithm", &["z array", "prefix", "pattern matching", "o(n)"]),
        ("Manacher's", &["palindrome", "center expansion", "o(n)", "longest palindromic substring"]),
        ("Suffix Array", &["sorted suffixes", "lcp", "pattern search", "string processing"]),
        ("Fenwick Tree (BIT)", &["binary indexed tree", "prefix sum", "update", "o(log n)"]),
        ("Heavy-Light Decomposition", &["tree paths", "chains", "segment tree", "path queries"]),
        ("Mo's algorithm", &["offline queries", "sqrt decomposition", "range queries", "block sorting"]),
        ("Square Root Decomposition", &["sqrt blocks", "precompute", "range queries", "point updates"]),
      ],
      fallback: &["algorithm", "advanced", "competitive programming"],
    },
    bonus: &["implementation details", "time complexity", "space complexity", "example problems"],
  },
  Template {
    pattern: "How do you solve {problem} optimally?",
    variables: &[Variable {
      name: "problem",
      options: &[
        "the N-Queens problem",
        "Sudoku solver",
        "the traveling salesman problem",
        "graph coloring",
        "maximum flow",
        "minimum cut",
        "bipartite matching",
        "shortest path with k edges",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "problem",
      table: &[
        ("the N-Queens problem", &["backtracking", "constraint", "diagonal", "column check"]),
        ("Sudoku solver", &["backtracking", "constraint propagation", "valid check", "empty cell"]),
        ("the traveling salesman problem", &["dp bitmask", "np hard", "approximation", "held karp"]),
        ("graph coloring", &["backtracking", "chromatic number", "greedy", "constraint"]),
        ("maximum flow", &["ford fulkerson", "edmonds karp", "augmenting path", "residual graph"]),
        ("minimum cut", &["max flow min cut", "ford fulkerson", "residual graph", "s-t cut"]),
        ("bipartite matching", &["hungarian", "hopcroft karp", "maximum matching", "augmenting path"]),
        ("shortest path with k edges", &["dp", "bellman ford variant", "k iterations", "edge count"]),
      ],
      fallback: &["problem", "optimization", "algorithm"],
    },
    bonus: &["time complexity", "space complexity", "optimization techniques", "applications"],
  },
  Template {
    pattern: "Explain {concept} and how it's used in advanced data structures.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "lazy propagation",
        "persistent data structures",
        "implicit treaps",
        "link-cut trees",
        "centroid decomposition",
        "euler tour technique",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("lazy propagation", &["segment tree", "range update", "deferred", "propagate on query"]),
        ("persistent data structures", &["versioning", "immutable", "path copying", "fat node"]),
        ("implicit treaps", &["bst heap hybrid", "split merge", "rope", "sequence operations"]),
        ("link-cut trees", &["dynamic trees", "splay tree", "path operations", "access preferred"]),
        ("centroid decomposition", &["tree center", "divide conquer", "path queries", "distance queries"]),
        ("euler tour technique", &["flatten tree", "subtree queries", "segment tree", "in out time"]),
      ],
      fallback: &["advanced", "data structure", "technique"],
    },
    bonus: &["implementation", "use cases", "complexity analysis", "problems that use it"],
  },
];
