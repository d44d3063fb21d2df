//! Operating systems templates.

use super::{MustHave, Template, Variable};

pub static EASY: &[Template] = &[
  Template {
    pattern: "What is the difference between {concept1} and {concept2}?",
    variables: &[
      Variable {
        name: "concept1",
        options: &[
          "process",
          "program",
          "kernel mode",
          "multitasking",
          "physical memory",
          "stack",
          "paging",
          "preemptive scheduling",
        ],
      },
      Variable {
        name: "concept2",
        options: &[
          "thread",
          "process",
          "user mode",
          "multiprocessing",
          "virtual memory",
          "heap",
          "segmentation",
          "non-preemptive scheduling",
        ],
      },
    ],
    must_have: MustHave::ByPair {
      vars: ("concept1", "concept2"),
      table: &[
        (("process", "thread"), &["memory", "resource", "lightweight", "shared", "address space"]),
        (("program", "process"), &["static", "dynamic", "execution", "memory", "running"]),
        (("kernel mode", "user mode"), &["privileged", "restricted", "hardware", "system call"]),
        (("multitasking", "multiprocessing"), &["single cpu", "multiple cpu", "concurrent", "parallel"]),
        (("physical memory", "virtual memory"), &["ram", "abstraction", "address space", "swap"]),
        (("stack", "heap"), &["automatic", "dynamic", "lifo", "allocation"]),
        (("paging", "segmentation"), &["fixed size", "variable size", "page", "segment"]),
        (("preemptive scheduling", "non-preemptive scheduling"), &["interrupt", "voluntary", "time slice", "completion"]),
      ],
      fallback: &["operating system", "concept", "difference"],
    },
    bonus: &["example", "use case", "advantage", "context switch"],
  },
  Template {
    pattern: "Explain what {concept} means in operating systems.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "context switching",
        "system call",
        "interrupt handling",
        "process states",
        "PCB (Process Control Block)",
        "kernel",
        "bootloader",
        "shell",
        "daemon process",
        "orphan process",
        "zombie process",
        "fork system call",
        "exec system call",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("context switching", &["save", "restore", "registers", "state", "overhead"]),
        ("system call", &["user mode", "kernel mode", "interface", "services", "trap"]),
        ("interrupt handling", &["interrupt", "handler", "ISR", "priority", "hardware"]),
        ("process states", &["new", "ready", "running", "waiting", "terminated"]),
        ("PCB (Process Control Block)", &["process id", "state", "registers", "memory", "information"]),
        ("kernel", &["core", "hardware", "system services", "privileged", "os core"]),
        ("bootloader", &["boot", "load os", "mbr", "grub", "initialization"]),
        ("shell", &["command interpreter", "interface", "bash", "terminal", "commands"]),
        ("daemon process", &["background", "service", "no terminal", "system tasks"]),
        ("orphan process", &["parent terminated", "init adopts", "ppid", "reparenting"]),
        ("zombie process", &["terminated", "exit status", "wait", "resource leak"]),
        ("fork system call", &["create process", "child", "copy", "pid"]),
        ("exec system call", &["replace", "load program", "new image", "execute"]),
      ],
      fallback: &["operating system", "kernel", "process"],
    },
    bonus: &["example", "implementation", "importance", "overhead"],
  },
  Template {
    pattern: "What are the main functions of {component} in an operating system?",
    variables: &[Variable {
      name: "component",
      options: &[
        "the process scheduler",
        "the memory manager",
        "the file system",
        "the I/O manager",
        "the interrupt handler",
        "the device driver",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "component",
      table: &[
        ("the process scheduler", &["allocate cpu", "scheduling algorithm", "ready queue", "dispatch"]),
        ("the memory manager", &["allocate memory", "virtual memory", "protection", "sharing"]),
        ("the file system", &["storage", "directories", "access control", "organization"]),
        ("the I/O manager", &["device communication", "buffering", "drivers", "requests"]),
        ("the interrupt handler", &["handle interrupts", "isr", "priority", "context save"]),
        ("the device driver", &["hardware interface", "abstraction", "kernel module", "communication"]),
      ],
      fallback: &["function", "responsibility", "operating system"],
    },
    bonus: &["implementation", "challenges", "example", "importance"],
  },
  Template {
    pattern: "Describe the {type} type of operating system.",
    variables: &[Variable {
      name: "type",
      options: &["batch processing", "time-sharing", "real-time", "distributed", "embedded", "network", "mobile"],
    }],
    must_have: MustHave::ByVar {
      var: "type",
      table: &[
        ("batch processing", &["jobs", "no user interaction", "queue", "throughput"]),
        ("time-sharing", &["multiple users", "time slice", "interactive", "response time"]),
        ("real-time", &["deadline", "deterministic", "hard soft", "predictable"]),
        ("distributed", &["multiple computers", "network", "resource sharing", "transparency"]),
        ("embedded", &["dedicated function", "resource constrained", "real-time", "specific purpose"]),
        ("network", &["file sharing", "client server", "network resources", "centralized"]),
        ("mobile", &["touch interface", "power efficiency", "sensors", "apps"]),
      ],
      fallback: &["operating system", "type", "characteristics"],
    },
    bonus: &["examples", "advantages", "disadvantages", "use cases"],
  },
  Template {
    pattern: "What is {concept} and why is it important?",
    variables: &[Variable {
      name: "concept",
      options: &[
        "process synchronization",
        "inter-process communication",
        "CPU scheduling",
        "memory protection",
        "file permissions",
        "user authentication",
      ],
    }],
    must_have: MustHave::Fixed(&["importance", "mechanism", "operating system", "functionality"]),
    bonus: &["implementation", "examples", "challenges", "solutions"],
  },
];

pub static MEDIUM: &[Template] = &[
  Template {
    pattern: "Explain {algorithm} scheduling algorithm and its characteristics.",
    variables: &[Variable {
      name: "algorithm",
      options: &[
        "Round Robin",
        "Shortest Job First (SJF)",
        "Priority Scheduling",
        "First Come First Serve (FCFS)",
        "Multilevel Queue",
        "Multilevel Feedback Queue",
        "Shortest Remaining Time First (SRTF)",
        "Highest Response Ratio Next (HRRN)",
        "Lottery Scheduling",
        "Fair Share Scheduling",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "algorithm",
      table: &[
        ("Round Robin", &["time quantum", "preemptive", "fair", "circular queue"]),
        ("Shortest Job First (SJF)", &["burst time", "shortest", "optimal", "starvation"]),
        ("Priority Scheduling", &["priority", "preemptive", "non-preemptive", "starvation"]),
        ("First Come First Serve (FCFS)", &["fifo", "non-preemptive", "simple", "convoy effect"]),
        ("Multilevel Queue", &["multiple queues", "priority", "scheduling", "foreground", "background"]),
        ("Multilevel Feedback Queue", &["feedback", "dynamic priority", "aging", "multiple queues"]),
        ("Shortest Remaining Time First (SRTF)", &["preemptive sjf", "remaining time", "optimal", "overhead"]),
        ("Highest Response Ratio Next (HRRN)", &["response ratio", "waiting time", "burst time", "non-preemptive"]),
        ("Lottery Scheduling", &["random", "tickets", "probabilistic", "fair"]),
        ("Fair Share Scheduling", &["user groups", "proportional", "share", "fair allocation"]),
      ],
      fallback: &["scheduling", "cpu", "process"],
    },
    bonus: &["waiting time", "turnaround time", "response time", "throughput", "starvation"],
  },
  Template {
    pattern: "How does {mechanism} work in memory management?",
    variables: &[Variable {
      name: "mechanism",
      options: &[
        "paging",
        "segmentation",
        "virtual memory",
        "demand paging",
        "page replacement",
        "memory mapping",
        "copy-on-write",
        "memory compaction",
        "swapping",
        "memory-mapped files",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "mechanism",
      table: &[
        ("paging", &["page", "frame", "page table", "fixed size", "physical memory"]),
        ("segmentation", &["segment", "variable size", "logical", "segment table"]),
        ("virtual memory", &["virtual address", "physical address", "swap", "larger than physical"]),
        ("demand paging", &["page fault", "lazy loading", "swap in", "needed pages"]),
        ("page replacement", &["page fault", "victim page", "algorithm", "fifo", "lru"]),
        ("memory mapping", &["map file", "virtual address", "shared", "mmap"]),
        ("copy-on-write", &["cow", "shared pages", "copy on modify", "fork optimization"]),
        ("memory compaction", &["fragmentation", "move processes", "contiguous", "overhead"]),
        ("swapping", &["swap space", "disk", "memory full", "suspend resume"]),
        ("memory-mapped files", &["file mapping", "virtual memory", "lazy loading", "shared"]),
      ],
      fallback: &["memory", "address", "allocation"],
    },
    bonus: &["fragmentation", "page table", "TLB", "performance", "overhead"],
  },
  Template {
    pattern: "Compare {algorithm1} and {algorithm2} page replacement algorithms.",
    variables: &[
      Variable {
        name: "algorithm1",
        options: &["FIFO", "LRU", "Optimal", "Clock"],
      },
      Variable {
        name: "algorithm2",
        options: &["LRU", "Optimal", "Clock", "LFU"],
      },
    ],
    must_have: MustHave::Fixed(&["page fault", "replacement", "victim", "performance"]),
    bonus: &["belady's anomaly", "implementation", "overhead", "hit ratio"],
  },
  Template {
    pattern: "Explain the concept of {concept} in file systems.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "inodes",
        "file allocation table (FAT)",
        "journaling",
        "hard links vs soft links",
        "file descriptors",
        "directory structure",
        "disk scheduling algorithms",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("inodes", &["metadata", "file information", "pointer", "unix", "number"]),
        ("file allocation table (FAT)", &["fat table", "cluster", "dos", "linked list"]),
        ("journaling", &["transaction", "recovery", "crash consistency", "log"]),
        ("hard links vs soft links", &["inode", "symbolic", "reference", "path"]),
        ("file descriptors", &["integer", "open file", "process", "table"]),
        ("directory structure", &["tree", "hierarchy", "path", "entries"]),
        ("disk scheduling algorithms", &["seek time", "fcfs", "sstf", "scan", "elevator"]),
      ],
      fallback: &["file system", "storage", "organization"],
    },
    bonus: &["implementation", "example", "advantages", "file systems that use it"],
  },
  Template {
    pattern: "What is {concept} in the context of process management?",
    variables: &[Variable {
      name: "concept",
      options: &[
        "process creation",
        "process termination",
        "process hierarchy",
        "signals",
        "wait and exit",
        "process groups",
        "sessions",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("process creation", &["fork", "exec", "child process", "parent process"]),
        ("process termination", &["exit", "wait", "zombie", "resource cleanup"]),
        ("process hierarchy", &["parent child", "tree", "init", "ppid"]),
        ("signals", &["interrupt", "handler", "sigkill", "sigterm", "asynchronous"]),
        ("wait and exit", &["wait", "exit status", "blocking", "non-blocking"]),
        ("process groups", &["group leader", "job control", "signal delivery", "pgid"]),
        ("sessions", &["session leader", "controlling terminal", "sid", "login"]),
      ],
      fallback: &["process", "management", "operating system"],
    },
    bonus: &["system calls", "example", "importance", "implementation"],
  },
  Template {
    pattern: "How does the operating system handle {scenario}?",
    variables: &[Variable {
      name: "scenario",
      options: &[
        "a page fault",
        "an interrupt",
        "a system call",
        "process context switch",
        "memory allocation request",
        "file open request",
      ],
    }],
    must_have: MustHave::Fixed(&["handle", "steps", "operating system", "mechanism"]),
    bonus: &["overhead", "optimization", "example", "state changes"],
  },
];

pub static HARD: &[Template] = &[
  Template {
    pattern: "Explain {concept} and the strategies to handle it.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "deadlock",
        "race condition",
        "priority inversion",
        "thrashing",
        "starvation",
        "livelock",
        "convoy effect",
        "thundering herd problem",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("deadlock", &["mutual exclusion", "hold and wait", "no preemption", "circular wait", "prevention"]),
        ("race condition", &["concurrent", "shared resource", "synchronization", "critical section"]),
        ("priority inversion", &["priority", "inheritance", "low priority", "high priority", "blocking"]),
        ("thrashing", &["page fault", "high paging", "working set", "memory", "performance"]),
        ("starvation", &["indefinite waiting", "priority", "aging", "fairness"]),
        ("livelock", &["active waiting", "no progress", "retry", "mutual blocking"]),
        ("convoy effect", &["long process", "blocking", "fcfs", "io bound"]),
        ("thundering herd problem", &["wake all", "contention", "single resource", "stampede"]),
      ],
      fallback: &["problem", "solution", "prevention"],
    },
    bonus: &["detection", "prevention", "avoidance", "recovery", "example"],
  },
  Template {
    pattern: "Compare and contrast {mechanism1} and {mechanism2} for process synchronization.",
    variables: &[
      Variable {
        name: "mechanism1",
        options: &["mutex", "semaphore", "monitors", "spinlock", "read-write locks", "condition variables"],
      },
      Variable {
        name: "mechanism2",
        options: &["semaphore", "monitors", "mutex", "mutex", "mutex", "semaphores"],
      },
    ],
    must_have: MustHave::Fixed(&["synchronization", "mutual exclusion", "critical section", "lock", "concurrent"]),
    bonus: &["implementation", "overhead", "deadlock", "busy waiting", "advantage"],
  },
  Template {
    pattern: "Explain the {problem} problem and its solutions.",
    variables: &[Variable {
      name: "problem",
      options: &[
        "producer-consumer",
        "readers-writers",
        "dining philosophers",
        "sleeping barber",
        "bounded buffer",
        "cigarette smokers",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "problem",
      table: &[
        ("producer-consumer", &["buffer", "producer", "consumer", "synchronization", "semaphore"]),
        ("readers-writers", &["readers", "writers", "shared data", "priority", "starvation"]),
        ("dining philosophers", &["philosophers", "forks", "deadlock", "resource allocation"]),
        ("sleeping barber", &["barber", "customers", "waiting room", "semaphore"]),
        ("bounded buffer", &["buffer size", "producer", "consumer", "full empty"]),
        ("cigarette smokers", &["agents", "smokers", "resources", "conditional synchronization"]),
      ],
      fallback: &["synchronization", "problem", "solution"],
    },
    bonus: &["code solution", "deadlock prevention", "starvation prevention", "analysis"],
  },
  Template {
    pattern: "How does {mechanism} work internally in the kernel?",
    variables: &[Variable {
      name: "mechanism",
      options: &[
        "virtual memory management",
        "the scheduler",
        "interrupt handling",
        "system call dispatch",
        "memory protection",
        "process isolation",
      ],
    }],
    must_have: MustHave::Fixed(&["kernel", "implementation", "internal", "mechanism"]),
    bonus: &["data structures used", "algorithms", "performance", "linux/windows implementation"],
  },
  Template {
    pattern: "Explain {technique} and when it should be used.",
    variables: &[Variable {
      name: "technique",
      options: &[
        "kernel preemption",
        "real-time scheduling",
        "NUMA-aware scheduling",
        "CPU affinity",
        "cgroups",
        "namespaces",
        "capabilities",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "technique",
      table: &[
        ("kernel preemption", &["preempt kernel", "low latency", "interrupt context", "preempt count"]),
        ("real-time scheduling", &["deadline", "sched_fifo", "sched_rr", "priority", "deterministic"]),
        ("NUMA-aware scheduling", &["numa", "node", "local memory", "affinity", "topology"]),
        ("CPU affinity", &["bind process", "cpu mask", "cache locality", "performance"]),
        ("cgroups", &["control groups", "resource limits", "isolation", "hierarchy"]),
        ("namespaces", &["isolation", "pid namespace", "network namespace", "containers"]),
        ("capabilities", &["fine-grained", "privileges", "root powers", "cap_net_admin"]),
      ],
      fallback: &["technique", "kernel", "advanced"],
    },
    bonus: &["use cases", "implementation", "examples", "linux specific"],
  },
  Template {
    pattern: "Discuss the security implications of {topic} in operating systems.",
    variables: &[Variable {
      name: "topic",
      options: &[
        "buffer overflow attacks",
        "privilege escalation",
        "rootkits",
        "kernel exploits",
        "side-channel attacks",
        "Spectre and Meltdown",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "topic",
      table: &[
        ("buffer overflow attacks", &["stack", "heap", "return address", "shellcode", "canary"]),
        ("privilege escalation", &["root", "setuid", "vulnerability", "kernel exploit"]),
        ("rootkits", &["hidden", "kernel level", "user level", "detection evasion"]),
        ("kernel exploits", &["privilege", "vulnerability", "system compromise", "patch"]),
        ("side-channel attacks", &["timing", "cache", "information leakage", "covert"]),
        ("Spectre and Meltdown", &["speculative execution", "cpu vulnerability", "isolation bypass", "cache timing"]),
      ],
      fallback: &["security", "attack", "defense"],
    },
    bonus: &["mitigation techniques", "examples", "detection", "prevention"],
  },
];
