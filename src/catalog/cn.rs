//! Computer networks templates.

use super::{MustHave, Template, Variable};

pub static EASY: &[Template] = &[
  Template {
    pattern: "Explain the role of {layer} in the OSI model.",
    variables: &[Variable {
      name: "layer",
      options: &[
        "Physical layer",
        "Data Link layer",
        "Network layer",
        "Transport layer",
        "Application layer",
        "Session layer",
        "Presentation layer",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "layer",
      table: &[
        ("Physical layer", &["bits", "transmission", "cables", "signals", "hardware"]),
        ("Data Link layer", &["frames", "mac address", "error detection", "flow control"]),
        ("Network layer", &["packets", "routing", "ip address", "logical addressing"]),
        ("Transport layer", &["segments", "tcp", "udp", "port", "end-to-end"]),
        ("Application layer", &["http", "ftp", "smtp", "user interface", "protocols"]),
        ("Session layer", &["session", "synchronization", "dialog control", "checkpointing"]),
        ("Presentation layer", &["encryption", "compression", "format", "translation"]),
      ],
      fallback: &["layer", "function", "protocol"],
    },
    bonus: &["protocols", "PDU", "example", "devices"],
  },
  Template {
    pattern: "What is the difference between {protocol1} and {protocol2}?",
    variables: &[
      Variable {
        name: "protocol1",
        options: &["TCP", "IPv4", "HTTP", "FTP", "hub", "switch", "LAN", "circuit switching"],
      },
      Variable {
        name: "protocol2",
        options: &["UDP", "IPv6", "HTTPS", "SFTP", "switch", "router", "WAN", "packet switching"],
      },
    ],
    must_have: MustHave::ByPair {
      vars: ("protocol1", "protocol2"),
      table: &[
        (("TCP", "UDP"), &["connection", "reliable", "unreliable", "handshake", "acknowledgment"]),
        (("IPv4", "IPv6"), &["32-bit", "128-bit", "address space", "header", "format"]),
        (("HTTP", "HTTPS"), &["secure", "ssl", "tls", "encryption", "port 80", "port 443"]),
        (("FTP", "SFTP"), &["secure", "encryption", "file transfer", "ssh", "plain text"]),
        (("hub", "switch"), &["broadcast", "unicast", "collision domain", "mac address table"]),
        (("switch", "router"), &["layer 2", "layer 3", "mac", "ip", "routing"]),
        (("LAN", "WAN"), &["local", "wide", "geographic", "ownership", "speed"]),
        (("circuit switching", "packet switching"), &["dedicated path", "shared", "efficient", "delay"]),
      ],
      fallback: &["protocol", "difference", "network"],
    },
    bonus: &["port number", "use case", "header", "application"],
  },
  Template {
    pattern: "What is {concept} in computer networks?",
    variables: &[Variable {
      name: "concept",
      options: &[
        "an IP address",
        "a MAC address",
        "a subnet mask",
        "a default gateway",
        "a port number",
        "bandwidth",
        "latency",
        "throughput",
        "jitter",
        "packet loss",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("an IP address", &["network id", "host id", "logical", "ipv4 ipv6"]),
        ("a MAC address", &["physical", "hardware", "nic", "48-bit", "unique"]),
        ("a subnet mask", &["network portion", "host portion", "divide", "cidr"]),
        ("a default gateway", &["router", "exit point", "different network", "forward"]),
        ("a port number", &["process identifier", "tcp udp", "16-bit", "socket"]),
        ("bandwidth", &["capacity", "bits per second", "maximum", "data rate"]),
        ("latency", &["delay", "time", "round trip", "propagation"]),
        ("throughput", &["actual rate", "effective", "performance", "measured"]),
        ("jitter", &["variation", "delay", "inconsistent", "voip"]),
        ("packet loss", &["dropped", "congestion", "error", "reliability"]),
      ],
      fallback: &["network", "concept", "definition"],
    },
    bonus: &["example", "importance", "measurement", "troubleshooting"],
  },
  Template {
    pattern: "Explain the purpose of {device} in a network.",
    variables: &[Variable {
      name: "device",
      options: &[
        "a router",
        "a switch",
        "a hub",
        "a modem",
        "a firewall",
        "a load balancer",
        "an access point",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "device",
      table: &[
        ("a router", &["routing", "layer 3", "ip address", "forward packets", "networks"]),
        ("a switch", &["layer 2", "mac address", "forward frames", "collision domain"]),
        ("a hub", &["layer 1", "broadcast", "all ports", "collision"]),
        ("a modem", &["modulation", "demodulation", "isp", "analog digital"]),
        ("a firewall", &["security", "filter", "rules", "block allow"]),
        ("a load balancer", &["distribute", "traffic", "servers", "availability"]),
        ("an access point", &["wireless", "wifi", "ssid", "clients"]),
      ],
      fallback: &["device", "network", "function"],
    },
    bonus: &["features", "examples", "configuration", "placement"],
  },
  Template {
    pattern: "Describe the {topology} network topology.",
    variables: &[Variable {
      name: "topology",
      options: &["bus", "star", "ring", "mesh", "tree", "hybrid"],
    }],
    must_have: MustHave::ByVar {
      var: "topology",
      table: &[
        ("bus", &["single cable", "terminator", "collision", "simple"]),
        ("star", &["central hub", "dedicated connection", "easy troubleshooting"]),
        ("ring", &["circular", "token", "unidirectional", "sequential"]),
        ("mesh", &["interconnected", "redundancy", "reliable", "expensive"]),
        ("tree", &["hierarchical", "root", "branches", "scalable"]),
        ("hybrid", &["combination", "mixed", "flexible", "complex"]),
      ],
      fallback: &["topology", "network", "structure"],
    },
    bonus: &["advantages", "disadvantages", "use cases", "diagram"],
  },
];

pub static MEDIUM: &[Template] = &[
  Template {
    pattern: "How does {protocol} work and what are its key features?",
    variables: &[Variable {
      name: "protocol",
      options: &[
        "DNS resolution",
        "ARP (Address Resolution Protocol)",
        "DHCP",
        "NAT",
        "ICMP",
        "BGP",
        "OSPF",
        "RIP",
        "SNMP",
        "HTTP/2",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "protocol",
      table: &[
        ("DNS resolution", &["domain name", "ip address", "resolver", "query", "hierarchy"]),
        ("ARP (Address Resolution Protocol)", &["ip to mac", "broadcast", "arp table", "cache"]),
        ("DHCP", &["dynamic", "ip allocation", "lease", "server", "automatic"]),
        ("NAT", &["network address translation", "private ip", "public ip", "port"]),
        ("ICMP", &["internet control message", "ping", "error reporting", "traceroute"]),
        ("BGP", &["border gateway", "autonomous system", "path vector", "policy"]),
        ("OSPF", &["open shortest path first", "link state", "dijkstra", "area"]),
        ("RIP", &["routing information protocol", "distance vector", "hop count", "simple"]),
        ("SNMP", &["simple network management", "monitoring", "mib", "agents"]),
        ("HTTP/2", &["multiplexing", "binary framing", "header compression", "server push"]),
      ],
      fallback: &["protocol", "network", "communication"],
    },
    bonus: &["message format", "example", "security", "implementation"],
  },
  Template {
    pattern: "Explain {concept} in the context of network routing.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "routing tables",
        "static vs dynamic routing",
        "distance vector routing",
        "link state routing",
        "BGP",
        "path selection",
        "route aggregation",
        "default routes",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("routing tables", &["destination", "next hop", "metric", "interface", "route"]),
        ("static vs dynamic routing", &["manual", "automatic", "protocol", "update", "scalability"]),
        ("distance vector routing", &["hop count", "bellman-ford", "routing table exchange", "rip"]),
        ("link state routing", &["topology", "dijkstra", "lsa", "ospf", "shortest path"]),
        ("BGP", &["border gateway", "autonomous system", "path vector", "policy", "internet"]),
        ("path selection", &["metric", "administrative distance", "longest prefix", "attributes"]),
        ("route aggregation", &["summarization", "cidr", "reduce entries", "supernet"]),
        ("default routes", &["gateway of last resort", "0.0.0.0", "unknown destination"]),
      ],
      fallback: &["routing", "path", "network"],
    },
    bonus: &["algorithm", "convergence", "scalability", "example"],
  },
  Template {
    pattern: "Explain how {mechanism} helps in network reliability.",
    variables: &[Variable {
      name: "mechanism",
      options: &[
        "error detection",
        "error correction",
        "flow control",
        "congestion control",
        "acknowledgments",
        "retransmission",
        "checksums",
        "CRC",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "mechanism",
      table: &[
        ("error detection", &["detect", "checksum", "crc", "parity", "corrupt"]),
        ("error correction", &["correct", "hamming code", "fec", "retransmit"]),
        ("flow control", &["sender receiver", "buffer", "sliding window", "rate"]),
        ("congestion control", &["network congestion", "slow start", "avoidance", "tcp"]),
        ("acknowledgments", &["ack", "confirmation", "received", "reliable"]),
        ("retransmission", &["resend", "lost packet", "timeout", "duplicate"]),
        ("checksums", &["sum", "verify", "integrity", "header data"]),
        ("CRC", &["cyclic redundancy check", "polynomial", "frame check", "error detection"]),
      ],
      fallback: &["reliability", "network", "mechanism"],
    },
    bonus: &["implementation", "overhead", "examples", "protocols that use it"],
  },
  Template {
    pattern: "How does {mechanism} work in TCP?",
    variables: &[Variable {
      name: "mechanism",
      options: &[
        "the sliding window protocol",
        "congestion control",
        "flow control",
        "connection establishment",
        "connection termination",
        "Nagle's algorithm",
        "TCP fast retransmit",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "mechanism",
      table: &[
        ("the sliding window protocol", &["window size", "sender receiver", "ack", "in-flight"]),
        ("congestion control", &["cwnd", "slow start", "congestion avoidance", "aimd"]),
        ("flow control", &["rwnd", "receiver buffer", "advertised window", "not overwhelm"]),
        ("connection establishment", &["three-way handshake", "syn", "syn-ack", "ack"]),
        ("connection termination", &["four-way handshake", "fin", "ack", "time wait"]),
        ("Nagle's algorithm", &["small packets", "coalesce", "delay", "disable"]),
        ("TCP fast retransmit", &["duplicate acks", "triple dup", "retransmit early", "loss detection"]),
      ],
      fallback: &["tcp", "mechanism", "reliable"],
    },
    bonus: &["diagram", "state machine", "optimization", "problems"],
  },
  Template {
    pattern: "Explain the concept of {concept} in network addressing.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "subnetting",
        "CIDR notation",
        "classful addressing",
        "classless addressing",
        "private IP ranges",
        "public IP addresses",
        "IPv6 addressing",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("subnetting", &["divide network", "subnet mask", "broadcast", "network address"]),
        ("CIDR notation", &["slash notation", "prefix length", "flexible", "classless"]),
        ("classful addressing", &["class a b c", "fixed boundary", "wasteful", "legacy"]),
        ("classless addressing", &["cidr", "variable", "efficient", "vlsm"]),
        ("private IP ranges", &["10.x", "172.16", "192.168", "non-routable", "nat"]),
        ("public IP addresses", &["routable", "internet", "unique", "assigned"]),
        ("IPv6 addressing", &["128-bit", "hexadecimal", "colons", "expanded"]),
      ],
      fallback: &["addressing", "ip", "network"],
    },
    bonus: &["calculation", "examples", "best practices", "troubleshooting"],
  },
];

pub static HARD: &[Template] = &[
  Template {
    pattern: "Explain {concept} and discuss its security implications.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "TCP three-way handshake",
        "SSL/TLS handshake",
        "IPSec",
        "VPN tunneling",
        "firewall packet filtering",
        "DDoS attacks",
        "man-in-the-middle attacks",
        "DNS spoofing",
        "ARP poisoning",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("TCP three-way handshake", &["syn", "syn-ack", "ack", "sequence number", "connection establishment"]),
        ("SSL/TLS handshake", &["certificate", "encryption", "key exchange", "cipher suite", "secure"]),
        ("IPSec", &["authentication header", "encapsulating security payload", "tunnel", "transport"]),
        ("VPN tunneling", &["tunnel", "encryption", "private network", "protocols", "secure"]),
        ("firewall packet filtering", &["rules", "allow", "deny", "stateful", "stateless"]),
        ("DDoS attacks", &["distributed", "denial of service", "flood", "botnet", "mitigation"]),
        ("man-in-the-middle attacks", &["intercept", "eavesdrop", "modify", "impersonate"]),
        ("DNS spoofing", &["fake dns", "redirect", "cache poisoning", "dnssec"]),
        ("ARP poisoning", &["fake arp", "mac spoofing", "mitm", "gratuitous arp"]),
      ],
      fallback: &["security", "network", "protocol"],
    },
    bonus: &["attack prevention", "implementation", "overhead", "example"],
  },
  Template {
    pattern: "How does {technology} work at a technical level?",
    variables: &[Variable {
      name: "technology",
      options: &[
        "MPLS",
        "SDN (Software Defined Networking)",
        "network virtualization",
        "Quality of Service (QoS)",
        "traffic shaping",
        "load balancing algorithms",
        "CDN (Content Delivery Networks)",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "technology",
      table: &[
        ("MPLS", &["label switching", "lsr", "lsp", "forwarding", "fast"]),
        ("SDN (Software Defined Networking)", &["controller", "data plane", "control plane", "programmable"]),
        ("network virtualization", &["virtual network", "overlay", "vlan", "vxlan", "isolation"]),
        ("Quality of Service (QoS)", &["prioritization", "traffic class", "bandwidth", "latency", "jitter"]),
        ("traffic shaping", &["rate limiting", "token bucket", "leaky bucket", "smoothing"]),
        ("load balancing algorithms", &["round robin", "least connections", "weighted", "health checks"]),
        ("CDN (Content Delivery Networks)", &["edge servers", "caching", "geolocation", "latency reduction"]),
      ],
      fallback: &["technology", "network", "advanced"],
    },
    bonus: &["use cases", "implementation", "benefits", "challenges"],
  },
  Template {
    pattern: "Analyze the {protocol} protocol in depth.",
    variables: &[Variable {
      name: "protocol",
      options: &["HTTP/3 (QUIC)", "WebSocket", "gRPC", "MQTT", "CoAP", "TLS 1.3", "WireGuard"],
    }],
    must_have: MustHave::ByVar {
      var: "protocol",
      table: &[
        ("HTTP/3 (QUIC)", &["udp based", "0-rtt", "multiplexing", "congestion control"]),
        ("WebSocket", &["full duplex", "persistent", "upgrade", "real-time"]),
        ("gRPC", &["http/2", "protobuf", "rpc", "bidirectional streaming"]),
        ("MQTT", &["publish subscribe", "broker", "qos levels", "iot"]),
        ("CoAP", &["constrained", "udp", "rest-like", "iot", "lightweight"]),
        ("TLS 1.3", &["improved handshake", "0-rtt", "forward secrecy", "deprecated ciphers"]),
        ("WireGuard", &["modern vpn", "simple", "fast", "cryptographically sound"]),
      ],
      fallback: &["protocol", "modern", "network"],
    },
    bonus: &["comparison to predecessors", "use cases", "adoption", "limitations"],
  },
  Template {
    pattern: "Explain {concept} in the context of network security.",
    variables: &[Variable {
      name: "concept",
      options: &[
        "zero trust architecture",
        "network segmentation",
        "intrusion detection systems",
        "intrusion prevention systems",
        "SIEM",
        "PKI (Public Key Infrastructure)",
        "certificate chains",
      ],
    }],
    must_have: MustHave::ByVar {
      var: "concept",
      table: &[
        ("zero trust architecture", &["never trust", "always verify", "least privilege", "microsegmentation"]),
        ("network segmentation", &["divide network", "vlans", "isolation", "limit blast radius"]),
        ("intrusion detection systems", &["detect", "monitor", "alert", "signature anomaly"]),
        ("intrusion prevention systems", &["block", "inline", "prevent", "active"]),
        ("SIEM", &["security information", "event management", "correlation", "logs"]),
        ("PKI (Public Key Infrastructure)", &["certificates", "ca", "public private keys", "trust"]),
        ("certificate chains", &["root ca", "intermediate", "validation", "chain of trust"]),
      ],
      fallback: &["security", "network", "protection"],
    },
    bonus: &["implementation", "best practices", "tools", "challenges"],
  },
  Template {
    pattern: "Discuss the challenges and solutions for {scenario}.",
    variables: &[Variable {
      name: "scenario",
      options: &[
        "scaling network infrastructure",
        "securing IoT networks",
        "implementing SD-WAN",
        "network troubleshooting at scale",
        "handling network congestion",
        "ensuring high availability",
      ],
    }],
    must_have: MustHave::Fixed(&["challenge", "solution", "network", "approach"]),
    bonus: &["tools", "best practices", "case studies", "trade-offs"],
  },
];
