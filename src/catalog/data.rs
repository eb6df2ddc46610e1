//! The compiled-in pattern and principle catalog
//!
//! Pure literal data. Coordinates are author-specified percentages; no
//! layout is computed from them here.

use super::types::{BestPractices, ColorToken, Diagram, Edge, Node, Pattern, Principle};

pub(super) static PATTERNS: &[Pattern] = &[
    Pattern {
        id: "hierarchical",
        name: "Hierarchical",
        description: "Manager agent coordinates worker agents",
        use_cases: &[
            "Complex task decomposition",
            "Resource allocation",
            "Quality control",
        ],
        diagram: Diagram {
            nodes: &[
                Node {
                    id: "manager",
                    label: "Manager Agent",
                    x: 50.0,
                    y: 10.0,
                    color: ColorToken::Purple,
                },
                Node {
                    id: "worker1",
                    label: "Worker 1",
                    x: 20.0,
                    y: 60.0,
                    color: ColorToken::Blue,
                },
                Node {
                    id: "worker2",
                    label: "Worker 2",
                    x: 50.0,
                    y: 60.0,
                    color: ColorToken::Blue,
                },
                Node {
                    id: "worker3",
                    label: "Worker 3",
                    x: 80.0,
                    y: 60.0,
                    color: ColorToken::Blue,
                },
            ],
            edges: &[
                Edge::new("manager", "worker1"),
                Edge::new("manager", "worker2"),
                Edge::new("manager", "worker3"),
            ],
        },
        example: r#"// Manager Agent
class ManagerAgent {
  async delegateTask(task) {
    const subtasks = this.decompose(task);
    const workers = this.selectWorkers(subtasks);
    const results = await Promise.all(
      workers.map(w => w.execute())
    );
    return this.synthesize(results);
  }
}

// Worker Agent
class WorkerAgent {
  async execute(subtask) {
    return await this.process(subtask);
  }
}"#,
    },
    Pattern {
        id: "sequential",
        name: "Sequential Pipeline",
        description: "Agents process tasks in a defined sequence",
        use_cases: &[
            "Data processing pipelines",
            "Multi-step workflows",
            "Content generation",
        ],
        diagram: Diagram {
            nodes: &[
                Node {
                    id: "agent1",
                    label: "Agent 1\nData Collection",
                    x: 10.0,
                    y: 35.0,
                    color: ColorToken::Green,
                },
                Node {
                    id: "agent2",
                    label: "Agent 2\nProcessing",
                    x: 40.0,
                    y: 35.0,
                    color: ColorToken::Green,
                },
                Node {
                    id: "agent3",
                    label: "Agent 3\nValidation",
                    x: 70.0,
                    y: 35.0,
                    color: ColorToken::Green,
                },
            ],
            edges: &[Edge::new("agent1", "agent2"), Edge::new("agent2", "agent3")],
        },
        example: r#"// Pipeline Pattern
class Pipeline {
  constructor(agents) {
    this.agents = agents;
  }

  async execute(input) {
    let result = input;
    for (const agent of this.agents) {
      result = await agent.process(result);
      if (!result.success) break;
    }
    return result;
  }
}

const pipeline = new Pipeline([
  new DataCollectorAgent(),
  new ProcessorAgent(),
  new ValidatorAgent()
]);"#,
    },
    Pattern {
        id: "collaborative",
        name: "Collaborative/Peer",
        description: "Agents work together as equals, sharing information",
        use_cases: &[
            "Brainstorming",
            "Consensus building",
            "Multi-perspective analysis",
        ],
        diagram: Diagram {
            nodes: &[
                Node {
                    id: "agent1",
                    label: "Agent 1",
                    x: 30.0,
                    y: 20.0,
                    color: ColorToken::Orange,
                },
                Node {
                    id: "agent2",
                    label: "Agent 2",
                    x: 70.0,
                    y: 20.0,
                    color: ColorToken::Orange,
                },
                Node {
                    id: "agent3",
                    label: "Agent 3",
                    x: 30.0,
                    y: 60.0,
                    color: ColorToken::Orange,
                },
                Node {
                    id: "agent4",
                    label: "Agent 4",
                    x: 70.0,
                    y: 60.0,
                    color: ColorToken::Orange,
                },
            ],
            edges: &[
                Edge::bidi("agent1", "agent2"),
                Edge::bidi("agent1", "agent3"),
                Edge::bidi("agent2", "agent4"),
                Edge::bidi("agent3", "agent4"),
            ],
        },
        example: r#"// Collaborative Pattern
class CollaborativeSystem {
  constructor(agents) {
    this.agents = agents;
    this.sharedMemory = new Map();
  }

  async solve(problem) {
    // All agents contribute
    const proposals = await Promise.all(
      this.agents.map(a => a.propose(problem))
    );

    // Agents discuss and refine
    for (let round = 0; round < 3; round++) {
      for (const agent of this.agents) {
        await agent.review(proposals);
      }
    }

    return this.buildConsensus(proposals);
  }
}"#,
    },
    Pattern {
        id: "router",
        name: "Router/Dispatcher",
        description: "Central router directs tasks to specialized agents",
        use_cases: &[
            "Task classification",
            "Load balancing",
            "Specialized processing",
        ],
        diagram: Diagram {
            nodes: &[
                Node {
                    id: "router",
                    label: "Router",
                    x: 50.0,
                    y: 20.0,
                    color: ColorToken::Red,
                },
                Node {
                    id: "specialist1",
                    label: "Code Agent",
                    x: 15.0,
                    y: 60.0,
                    color: ColorToken::Cyan,
                },
                Node {
                    id: "specialist2",
                    label: "Data Agent",
                    x: 40.0,
                    y: 60.0,
                    color: ColorToken::Cyan,
                },
                Node {
                    id: "specialist3",
                    label: "Vision Agent",
                    x: 65.0,
                    y: 60.0,
                    color: ColorToken::Cyan,
                },
                Node {
                    id: "specialist4",
                    label: "Text Agent",
                    x: 90.0,
                    y: 60.0,
                    color: ColorToken::Cyan,
                },
            ],
            edges: &[
                Edge::new("router", "specialist1"),
                Edge::new("router", "specialist2"),
                Edge::new("router", "specialist3"),
                Edge::new("router", "specialist4"),
            ],
        },
        example: r#"// Router Pattern
class RouterAgent {
  constructor() {
    this.specialists = {
      code: new CodeAgent(),
      data: new DataAgent(),
      vision: new VisionAgent(),
      text: new TextAgent()
    };
  }

  async route(task) {
    const taskType = this.classify(task);
    const agent = this.specialists[taskType];

    if (!agent) {
      throw new Error('No specialist found');
    }

    return await agent.execute(task);
  }

  classify(task) {
    // Classification logic
    if (task.includes('code')) return 'code';
    if (task.includes('analyze')) return 'data';
    // ... more rules
  }
}"#,
    },
    Pattern {
        id: "hybrid",
        name: "Hybrid/Multi-Layer",
        description: "Combines multiple patterns for complex systems",
        use_cases: &["Enterprise systems", "Complex workflows", "Adaptive systems"],
        diagram: Diagram {
            nodes: &[
                Node {
                    id: "orchestrator",
                    label: "Orchestrator",
                    x: 50.0,
                    y: 5.0,
                    color: ColorToken::Purple,
                },
                Node {
                    id: "router",
                    label: "Router",
                    x: 50.0,
                    y: 25.0,
                    color: ColorToken::Red,
                },
                Node {
                    id: "team1",
                    label: "Team 1",
                    x: 25.0,
                    y: 50.0,
                    color: ColorToken::Blue,
                },
                Node {
                    id: "team2",
                    label: "Team 2",
                    x: 75.0,
                    y: 50.0,
                    color: ColorToken::Blue,
                },
                Node {
                    id: "worker1",
                    label: "W1",
                    x: 15.0,
                    y: 75.0,
                    color: ColorToken::Green,
                },
                Node {
                    id: "worker2",
                    label: "W2",
                    x: 35.0,
                    y: 75.0,
                    color: ColorToken::Green,
                },
                Node {
                    id: "worker3",
                    label: "W3",
                    x: 65.0,
                    y: 75.0,
                    color: ColorToken::Green,
                },
                Node {
                    id: "worker4",
                    label: "W4",
                    x: 85.0,
                    y: 75.0,
                    color: ColorToken::Green,
                },
            ],
            edges: &[
                Edge::new("orchestrator", "router"),
                Edge::new("router", "team1"),
                Edge::new("router", "team2"),
                Edge::new("team1", "worker1"),
                Edge::new("team1", "worker2"),
                Edge::new("team2", "worker3"),
                Edge::new("team2", "worker4"),
            ],
        },
        example: r#"// Hybrid Pattern
class HybridSystem {
  constructor() {
    this.orchestrator = new OrchestratorAgent();
    this.router = new RouterAgent();
    this.teams = [
      new TeamManager([
        new WorkerAgent('w1'),
        new WorkerAgent('w2')
      ]),
      new TeamManager([
        new WorkerAgent('w3'),
        new WorkerAgent('w4')
      ])
    ];
  }

  async execute(complexTask) {
    // High-level orchestration
    const plan = await this.orchestrator
      .createPlan(complexTask);

    // Route to appropriate teams
    const teamTasks = await this.router
      .distribute(plan.tasks);

    // Teams execute in parallel
    const results = await Promise.all(
      teamTasks.map((task, i) =>
        this.teams[i].execute(task)
      )
    );

    // Orchestrator synthesizes
    return this.orchestrator
      .synthesize(results);
  }
}"#,
    },
];

pub(super) static PRINCIPLES: &[Principle] = &[
    Principle {
        title: "Communication Protocol",
        points: &[
            "Define clear message formats (JSON, Protocol Buffers)",
            "Use standardized schemas for inter-agent communication",
            "Implement request-response and pub-sub patterns",
            "Handle timeouts and retries gracefully",
        ],
    },
    Principle {
        title: "State Management",
        points: &[
            "Decide between stateful and stateless agents",
            "Use shared memory for collaboration",
            "Implement state persistence for fault tolerance",
            "Consider event sourcing for audit trails",
        ],
    },
    Principle {
        title: "Error Handling",
        points: &[
            "Implement circuit breakers for failing agents",
            "Use exponential backoff for retries",
            "Graceful degradation when agents are unavailable",
            "Centralized logging and monitoring",
        ],
    },
    Principle {
        title: "Scalability",
        points: &[
            "Design for horizontal scaling",
            "Use load balancers for agent pools",
            "Implement agent lifecycle management",
            "Monitor resource usage and performance",
        ],
    },
];

pub(super) static BEST_PRACTICES: BestPractices = BestPractices {
    dos: &[
        "Start simple and add complexity as needed",
        "Design for observability from the start",
        "Implement comprehensive testing strategies",
        "Use async communication when possible",
        "Document agent responsibilities clearly",
        "Build in fault tolerance mechanisms",
    ],
    donts: &[
        "Create circular dependencies between agents",
        "Ignore error handling and recovery",
        "Over-complicate with too many agents",
        "Forget about agent lifecycle management",
        "Neglect performance monitoring",
        "Build without clear communication protocols",
    ],
};
